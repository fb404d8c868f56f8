//! Byte counting for per-object progress bars.

use indicatif::ProgressBar;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::io::AsyncWrite;

/// An [`AsyncWrite`] adapter advancing a [`ProgressBar`] by every byte
/// accepted by the inner writer.
///
/// The first error raised by the inner writer is kept, so callers can tell a
/// failing destination apart from a failing source once the copy stops.
#[derive(Debug)]
pub struct ProgressWriter<W> {
    inner: W,
    progress: ProgressBar,
    error: Option<io::Error>,
}

impl<W> ProgressWriter<W> {
    /// Wrap `inner`, reporting into `progress`.
    pub fn new(inner: W, progress: ProgressBar) -> Self {
        Self {
            inner,
            progress,
            error: None,
        }
    }

    /// Take the first error the inner writer returned, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Keep `err` and hand an equivalent error back to the caller.
    fn record(&mut self, err: io::Error) -> io::Error {
        let reported = io::Error::new(err.kind(), err.to_string());
        if self.error.is_none() {
            self.error = Some(err);
        }
        reported
    }

    /// Get a reference to the progress bar.
    pub fn progress(&self) -> &ProgressBar {
        &self.progress
    }

    /// Unwrap the inner writer and its progress bar.
    pub fn into_parts(self) -> (W, ProgressBar) {
        (self.inner, self.progress)
    }
}

impl<W: AsyncWrite + Unpin> AsyncWrite for ProgressWriter<W> {
    fn poll_write(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        let this = &mut *self;
        match Pin::new(&mut this.inner).poll_write(cx, buf) {
            Poll::Ready(Ok(written)) => {
                this.progress.inc(written as u64);
                Poll::Ready(Ok(written))
            }
            Poll::Ready(Err(e)) => Poll::Ready(Err(this.record(e))),
            Poll::Pending => Poll::Pending,
        }
    }

    fn poll_flush(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        let this = &mut *self;
        match Pin::new(&mut this.inner).poll_flush(cx) {
            Poll::Ready(Err(e)) => Poll::Ready(Err(this.record(e))),
            other => other,
        }
    }

    fn poll_shutdown(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        let this = &mut *self;
        match Pin::new(&mut this.inner).poll_shutdown(cx) {
            Poll::Ready(Err(e)) => Poll::Ready(Err(this.record(e))),
            other => other,
        }
    }
}
