/// Turns an `async fn(ctx) -> Result<(), Error>` into a handler function pointer.
#[macro_export]
macro_rules! handler_func {
    ($func:expr $(,)?) => {
        |ctx| Box::pin($func(ctx))
    };
}
