// Deferred respawns, fired by the world loop once their deadline has passed.

use tokio::time::{Duration, Instant};

#[derive(Debug, Default)]
pub struct RespawnQueue {
    pending: Vec<(Instant, u8)>,
}

impl RespawnQueue {
    pub fn schedule(&mut self, id: u8, now: Instant, delay: Duration) {
        // One pending respawn per id; a newer death replaces the older deadline.
        self.pending.retain(|(_, pending)| *pending != id);
        self.pending.push((now + delay, id));
    }

    pub fn cancel(&mut self, id: u8) {
        self.pending.retain(|(_, pending)| *pending != id);
    }

    /// Removes and returns every id whose deadline is at or before `now`, oldest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<u8> {
        let mut due: Vec<(Instant, u8)> = Vec::new();
        self.pending.retain(|&(at, id)| {
            if at <= now {
                due.push((at, id));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|(at, _)| *at);
        due.into_iter().map(|(_, id)| id).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_deadline_has_not_passed_then_nothing_is_due() {
        let now = Instant::now();
        let mut queue = RespawnQueue::default();
        queue.schedule(3, now, Duration::from_secs(3));

        assert!(queue.take_due(now + Duration::from_secs(2)).is_empty());
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn when_deadlines_pass_then_ids_come_out_in_deadline_order() {
        let now = Instant::now();
        let mut queue = RespawnQueue::default();
        queue.schedule(5, now + Duration::from_millis(500), Duration::from_secs(3));
        queue.schedule(2, now, Duration::from_secs(3));

        assert_eq!(queue.take_due(now + Duration::from_secs(4)), vec![2, 5]);
        assert!(queue.is_empty());
    }

    #[test]
    fn when_player_leaves_then_pending_respawn_is_dropped() {
        let now = Instant::now();
        let mut queue = RespawnQueue::default();
        queue.schedule(7, now, Duration::from_secs(1));
        queue.schedule(7, now, Duration::from_secs(2));
        assert_eq!(queue.len(), 1);

        queue.cancel(7);

        assert!(queue.take_due(now + Duration::from_secs(10)).is_empty());
    }
}
