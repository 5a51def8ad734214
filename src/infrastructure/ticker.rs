use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::core::{cmd::TickerId, raw_msg::RawMsg};

/// Operations accepted by the TickerService
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickerOperation {
    Start { id: TickerId, period_ms: u64 },
    Cancel { id: TickerId },
}

/// TickerService owns the repeating timer tasks.
/// Each ticker reports `RawMsg::TimerTick(id)` once per period, starting one
/// period after it was started, until it is cancelled.
pub struct TickerService {
    // Incoming channels
    op_rx: mpsc::UnboundedReceiver<TickerOperation>,
    cancel_token: CancellationToken,
    // Outgoing channels
    raw_tx: mpsc::UnboundedSender<RawMsg>,
    tickers: HashMap<TickerId, CancellationToken>,
}

pub type NewTickerService = (
    mpsc::UnboundedSender<TickerOperation>, // op_tx - operations to send
    CancellationToken,                      // shutdown signal
    TickerService,
);

impl TickerService {
    /// Create a new TickerService
    pub fn new(raw_tx: mpsc::UnboundedSender<RawMsg>) -> NewTickerService {
        let (op_tx, op_rx) = mpsc::unbounded_channel();
        let cancel_token = CancellationToken::new();

        (
            op_tx,
            cancel_token.clone(),
            Self {
                op_rx,
                cancel_token,
                raw_tx,
                tickers: HashMap::new(),
            },
        )
    }

    /// Run the TickerService in background task
    pub fn run(mut self) {
        tokio::spawn(async move {
            self.run_service().await;
        });
    }

    /// Main service loop
    async fn run_service(&mut self) {
        loop {
            tokio::select! {
                result = self.op_rx.recv() => {
                    match result {
                        Some(op) => self.handle_operation(op),
                        None => {
                            log::info!("TickerService: operation channel closed");
                            break;
                        }
                    }
                }

                // Check for termination signal
                _ = self.cancel_token.cancelled() => {
                    log::info!("TickerService received cancellation signal");
                    break;
                }
            }
        }

        for (_, token) in self.tickers.drain() {
            token.cancel();
        }
    }

    fn handle_operation(&mut self, op: TickerOperation) {
        log::debug!("Handling TickerOperation: {op:?}");

        match op {
            TickerOperation::Start { id, period_ms } => self.start(id, period_ms),
            TickerOperation::Cancel { id } => self.cancel(id),
        }
    }

    fn start(&mut self, id: TickerId, period_ms: u64) {
        let token = self.cancel_token.child_token();
        let period = Duration::from_millis(period_ms.max(1));
        tokio::spawn(tick_loop(id, period, token.clone(), self.raw_tx.clone()));

        if let Some(previous) = self.tickers.insert(id, token) {
            log::warn!("{id} started twice; cancelling the older task");
            previous.cancel();
        }
    }

    fn cancel(&mut self, id: TickerId) {
        match self.tickers.remove(&id) {
            Some(token) => token.cancel(),
            None => log::debug!("Cancel for unknown {id}"),
        }
    }

    /// Number of tickers currently running
    pub fn active_count(&self) -> usize {
        self.tickers.len()
    }
}

async fn tick_loop(
    id: TickerId,
    period: Duration,
    token: CancellationToken,
    raw_tx: mpsc::UnboundedSender<RawMsg>,
) {
    let mut interval = interval_at(Instant::now() + period, period);
    // Late ticks are delivered late rather than bunched together
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = token.cancelled() => break,
            _ = interval.tick() => {
                if raw_tx.send(RawMsg::TimerTick(id)).is_err() {
                    break;
                }
            }
        }
    }
}
