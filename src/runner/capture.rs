// ABOUTME: Merged capture of a child's stdout and stderr.
// ABOUTME: A reader task forwards chunks in arrival order; the runner drains them up to a deadline.

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

const CHUNK: usize = 8 * 1024;

/// Output gathered from a child before its pipes closed or the deadline hit.
#[derive(Debug)]
pub(crate) struct Drained {
    pub output: Vec<u8>,
    /// False when the deadline passed with a pipe still open.
    pub complete: bool,
}

/// Background reader of both pipes of one child.
pub(crate) struct Capture {
    chunks: mpsc::UnboundedReceiver<Vec<u8>>,
    task: JoinHandle<std::io::Result<()>>,
}

impl Capture {
    pub(crate) fn spawn<O, E>(stdout: O, stderr: E) -> Self
    where
        O: AsyncRead + Unpin + Send + 'static,
        E: AsyncRead + Unpin + Send + 'static,
    {
        let (tx, chunks) = mpsc::unbounded_channel();
        let task = tokio::spawn(forward_merged(stdout, stderr, tx));
        Self { chunks, task }
    }

    /// Collect chunks until both pipes reach EOF or `deadline` passes.
    ///
    /// On deadline the reader is aborted and whatever arrived is returned.
    pub(crate) async fn drain_until(mut self, deadline: Instant) -> std::io::Result<Drained> {
        let mut output = Vec::new();
        loop {
            match tokio::time::timeout_at(deadline, self.chunks.recv()).await {
                Ok(Some(chunk)) => output.extend_from_slice(&chunk),
                Ok(None) => break,
                Err(_) => {
                    self.task.abort();
                    return Ok(Drained {
                        output,
                        complete: false,
                    });
                }
            }
        }

        self.task.await.map_err(std::io::Error::other)??;
        Ok(Drained {
            output,
            complete: true,
        })
    }

    pub(crate) fn abort(self) {
        self.task.abort();
    }
}

/// Read both streams to EOF, sending each chunk as it arrives.
async fn forward_merged<O, E>(
    mut stdout: O,
    mut stderr: E,
    tx: mpsc::UnboundedSender<Vec<u8>>,
) -> std::io::Result<()>
where
    O: AsyncRead + Unpin,
    E: AsyncRead + Unpin,
{
    let mut out_buf = vec![0u8; CHUNK];
    let mut err_buf = vec![0u8; CHUNK];
    let mut out_open = true;
    let mut err_open = true;

    while out_open || err_open {
        let chunk = tokio::select! {
            read = stdout.read(&mut out_buf), if out_open => match read? {
                0 => {
                    out_open = false;
                    continue;
                }
                n => out_buf[..n].to_vec(),
            },
            read = stderr.read(&mut err_buf), if err_open => match read? {
                0 => {
                    err_open = false;
                    continue;
                }
                n => err_buf[..n].to_vec(),
            },
        };
        // Receiver gone means the runner stopped waiting.
        if tx.send(chunk).is_err() {
            break;
        }
    }

    Ok(())
}
