use std::future::Future;
use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio_util::sync::CancellationToken;

use crate::handler::handle_line;
use crate::state::AppState;

/// Serve JSON-lines requests from `input` until it is exhausted or `shutdown`
/// resolves. Requests are answered one at a time, in order.
pub async fn run<R, W>(
    state: Arc<AppState>,
    input: R,
    output: W,
    shutdown: impl Future<Output = ()>,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin + Send + 'static,
    W: AsyncWrite + Unpin + Send + 'static,
{
    let cancel = CancellationToken::new();
    let (request_tx, request_rx) = kanal::bounded_async(state.config.channel_capacity);

    let reader = tokio::spawn(read_requests(input, request_tx, cancel.child_token()));
    let worker = tokio::spawn(serve_requests(Arc::clone(&state), request_rx, output));

    tracing::info!("Serving requests on stdin");

    tokio::select! {
        _ = shutdown => {
            tracing::info!("Shutdown requested");
        }
        result = worker => {
            match result {
                Ok(Ok(())) => tracing::info!("Input closed, stopping"),
                Ok(Err(e)) => tracing::error!("worker exited: {e}"),
                Err(e) => tracing::error!("worker task panicked: {e}"),
            }
        }
    }

    cancel.cancel();
    if let Err(e) = reader.await {
        tracing::error!("reader task panicked: {e}");
    }
    Ok(())
}

/// Forward non-blank lines to the worker, undecoded. Dropping the sender on
/// return closes the channel.
async fn read_requests<R>(
    mut input: R,
    request_tx: AsyncSender<Vec<u8>>,
    cancel: CancellationToken,
) where
    R: AsyncBufRead + Unpin,
{
    loop {
        let mut line = Vec::new();
        let read = tokio::select! {
            _ = cancel.cancelled() => break,
            read = input.read_until(b'\n', &mut line) => read,
        };

        match read {
            Ok(0) => break,
            Ok(_) if line.trim_ascii().is_empty() => continue,
            Ok(_) => {
                if let Err(e) = request_tx.send(line).await {
                    tracing::error!("Failed to queue request: {}", e);
                    break;
                }
            }
            Err(e) => {
                tracing::error!("Failed to read request: {}", e);
                break;
            }
        }
    }
    tracing::debug!("Request reader stopping");
}

async fn serve_requests<W>(
    state: Arc<AppState>,
    request_rx: AsyncReceiver<Vec<u8>>,
    mut output: W,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Ok(line) = request_rx.recv().await {
        let engine = Arc::clone(&state.engine);
        let response = tokio::task::spawn_blocking(move || handle_line(&engine, &line)).await?;

        let mut json = serde_json::to_string(&response)?;
        json.push('\n');
        output.write_all(json.as_bytes()).await?;
        output.flush().await?;
    }
    Ok(())
}
