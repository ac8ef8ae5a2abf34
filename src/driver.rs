//! Frame driver: an async stream of frames for one transition.
//!
//! Ticks the presenter on a fixed interval while a cross-fade is running
//! and ends after yielding the settled frame. Runtime-agnostic: sleeping
//! uses `futures-timer`, so it works under tokio, async-std or WASM.

use crate::domain::presentation::{Frame, Presenter};
use async_stream::stream;
use futures_timer::Delay;
use futures_util::Stream;
use std::time::{Duration, Instant};

/// Interval for a 60 fps host.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Stream frames until the current transition settles.
///
/// Always yields at least one frame; when nothing is animating that frame
/// is already settled.
pub fn frames(presenter: Presenter, interval: Duration) -> impl Stream<Item = Frame> {
    stream! {
        loop {
            let frame = presenter.frame_async(Instant::now()).await;
            let settled = frame.settled;
            yield frame;
            if settled {
                tracing::debug!("Frame stream finished");
                break;
            }
            Delay::new(interval).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChartConfig;
    use crate::domain::catalog::Catalog;
    use crate::domain::transition::{Easing, Timing, TransitionController};
    use futures_util::StreamExt;
    use std::sync::Arc;

    fn presenter(ms: u64) -> Presenter {
        let config = ChartConfig {
            timing: Timing::new(Duration::from_millis(ms), Easing::Linear),
            ..ChartConfig::default()
        };
        let catalog = Arc::new(Catalog::bundled(&config).unwrap());
        Presenter::new(TransitionController::new(catalog, config.timing), config)
    }

    #[tokio::test]
    async fn test_idle_stream_yields_one_frame() {
        let frames: Vec<_> = frames(presenter(50), FRAME_INTERVAL).collect().await;
        assert_eq!(frames.len(), 1);
        assert!(frames[0].settled);
    }

    #[tokio::test]
    async fn test_stream_runs_until_settled() {
        let p = presenter(60);
        p.press("1Y", Instant::now()).unwrap();
        let frames: Vec<_> = frames(p.clone(), Duration::from_millis(5)).collect().await;
        assert!(frames.len() > 1);
        let last = frames.last().unwrap();
        assert!(last.settled);
        assert_eq!(last.progress, 1.0);
        assert_eq!(*last.path, *p.controller().catalog().get(3).unwrap().path);
        assert!(frames.windows(2).all(|w| w[0].progress <= w[1].progress));
    }
}
