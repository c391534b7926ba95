//! Message queue.
//!
//! Plain FIFO with no capacity limit: arrival order is display order and
//! only the head is ever looked at.

use std::collections::VecDeque;

use super::types::Message;

#[derive(Debug, Default)]
pub struct MessageQueue {
    messages: VecDeque<Message>,
    total_enqueued: u64,
}

impl MessageQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message at the tail.
    pub fn enqueue(&mut self, message: Message) {
        self.messages.push_back(message);
        self.total_enqueued += 1;
    }

    pub fn peek_head(&self) -> Option<&Message> {
        self.messages.front()
    }

    /// Drop the head; does nothing on an empty queue.
    pub fn dequeue_head(&mut self) {
        self.messages.pop_front();
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of messages accepted since creation.
    pub fn total_enqueued(&self) -> u64 {
        self.total_enqueued
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_order() {
        let mut queue = MessageQueue::new();
        queue.enqueue(Message::text(Some("first"), None));
        queue.enqueue(Message::text(Some("second"), None));

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.peek_head().unwrap().title.as_deref(), Some("first"));
        // Peeking does not consume.
        assert_eq!(queue.peek_head().unwrap().title.as_deref(), Some("first"));

        queue.dequeue_head();
        assert_eq!(queue.peek_head().unwrap().title.as_deref(), Some("second"));
        queue.dequeue_head();
        assert!(queue.is_empty());
        assert_eq!(queue.total_enqueued(), 2);
    }

    #[test]
    fn dequeue_on_empty_is_noop() {
        let mut queue = MessageQueue::new();
        queue.dequeue_head();
        assert!(queue.peek_head().is_none());
        assert_eq!(queue.len(), 0);
    }
}
