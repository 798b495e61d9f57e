use futures::StreamExt;
use lapin::{
    options::{BasicConsumeOptions, QueueDeclareOptions},
    types::FieldTable,
    Connection, ConnectionProperties,
};
use tokio::sync::mpsc;

pub(crate) struct LapinConsumer {
    // keeps the connection alive for as long as we consume
    _conn: Connection,
    queue: mpsc::UnboundedReceiver<Vec<u8>>,
}

impl LapinConsumer {
    pub(crate) async fn recv(&mut self) -> Option<Vec<u8>> {
        self.queue.recv().await
    }
}

pub(crate) async fn create(addr: &str, queue: &str) -> Result<LapinConsumer, lapin::Error> {
    let rabbitmq_options = ConnectionProperties::default()
        .with_executor(tokio_executor_trait::Tokio::current())
        .with_reactor(tokio_reactor_trait::Tokio);
    let rabbitmq_conn = Connection::connect(addr, rabbitmq_options).await?;
    let rabbitmq_chan = rabbitmq_conn.create_channel().await?;

    // declare the queue, same options as the gateway uses
    rabbitmq_chan
        .queue_declare(
            queue,
            QueueDeclareOptions {
                durable: true,
                ..Default::default()
            },
            FieldTable::default(),
        )
        .await?;
    let mut rabbitmq_consumer = rabbitmq_chan
        .basic_consume(
            queue,
            "handler",
            BasicConsumeOptions {
                no_ack: true,
                ..Default::default()
            },
            FieldTable::default(),
        )
        .await?;

    let (message_queue_send, message_queue_recv) = mpsc::unbounded_channel::<Vec<u8>>();
    tokio::spawn(async move {
        loop {
            let message = match rabbitmq_consumer.next().await {
                Some(Ok(message)) => message.data,
                Some(Err(err)) => {
                    tracing::error!("error receiving message: {}", err);
                    continue;
                }
                None => break,
            };

            if let Err(err) = message_queue_send.send(message) {
                tracing::error!("error putting message on queue: {}", err);
                break;
            }
        }
    });

    Ok(LapinConsumer {
        _conn: rabbitmq_conn,
        queue: message_queue_recv,
    })
}
