//! Channel-backed effect sink for hosts that play effects on another thread.

use crossbeam_channel::{Receiver, Sender, TrySendError};
use log::trace;

use pathlink_core::{EffectSink, PathEffect};

/// [`EffectSink`] that forwards events into a bounded crossbeam channel.
///
/// Delivery is best effort: when the channel is full or the receiver is
/// gone, the event is dropped and counted.
#[derive(Debug)]
pub struct ChannelSink {
    tx: Sender<PathEffect>,
    dropped: u64,
}

impl ChannelSink {
    /// Wrap an existing sender.
    pub fn new(tx: Sender<PathEffect>) -> Self {
        Self { tx, dropped: 0 }
    }

    /// Events dropped because the channel was full or disconnected.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

impl EffectSink for ChannelSink {
    fn emit(&mut self, effect: PathEffect) {
        match self.tx.try_send(effect) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                self.dropped += 1;
                trace!("effect channel full, dropped event");
            }
            Err(TrySendError::Disconnected(_)) => {
                self.dropped += 1;
            }
        }
    }
}

/// Create a [`ChannelSink`] with room for `bound` pending events, and the
/// receiver the host drains.
pub fn channel_sink(bound: usize) -> (ChannelSink, Receiver<PathEffect>) {
    let (tx, rx) = crossbeam_channel::bounded(bound);
    (ChannelSink::new(tx), rx)
}
