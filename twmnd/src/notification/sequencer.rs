//! Display sequencer.
//!
//! Owns the queue and the width animation and moves messages through
//! `Idle → AnimatingForward → Holding → AnimatingBackward → Idle`. It never
//! reads the clock itself: every entry point takes the current instant, and
//! [`Popup::next_deadline`] tells the event loop when to call back.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

use popup_render::TextMeasurer;
use tracing::{debug, info, trace, warn};

use super::animation::{Animation, Direction};
use super::content::ContentView;
use super::easing::Easing;
use super::icon::IconResolver;
use super::position::Anchor;
use super::queue::MessageQueue;
use super::types::{DisplayPhase, Message};
use crate::config::AppConfig;
use crate::sound::SoundCommand;
use crate::surface::Surface;

/// Delay between accepting a message (or retiring one) and looking at the queue.
pub const QUEUE_CHECK_DELAY: Duration = Duration::from_millis(30);

/// No new cycle starts while the animation is this close to its end.
pub const START_GUARD: Duration = Duration::from_millis(50);

/// Frame period while an animation is running.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TimerKind {
    ProcessQueue,
    ReverseStart,
}

/// Fixed parameters of the popup, chosen once at construction.
#[derive(Debug, Clone)]
pub struct PopupOptions {
    pub anchor: Anchor,
    pub height: u32,
    pub hold: Duration,
    pub animation: Duration,
    pub sound: Option<SoundCommand>,
}

impl PopupOptions {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            anchor: config.position,
            height: config.height,
            hold: config.hold_duration(),
            animation: config.animation_duration(),
            sound: config.sound_command.clone().and_then(SoundCommand::new),
        }
    }
}

pub struct Popup<S: Surface> {
    options: PopupOptions,
    queue: MessageQueue,
    animation: Animation,
    surface: S,
    measurer: Box<dyn TextMeasurer>,
    icons: IconResolver,
    timers: BinaryHeap<Reverse<(Instant, u64, TimerKind)>>,
    timer_seq: u64,
    next_frame: Option<Instant>,
    width: Option<u32>,
    displayed: u64,
}

impl<S: Surface> Popup<S> {
    pub fn new(
        options: PopupOptions,
        surface: S,
        measurer: Box<dyn TextMeasurer>,
        icons: IconResolver,
    ) -> Self {
        let animation = Animation::new(options.animation);
        Self {
            options,
            queue: MessageQueue::new(),
            animation,
            surface,
            measurer,
            icons,
            timers: BinaryHeap::new(),
            timer_seq: 0,
            next_frame: None,
            width: None,
            displayed: 0,
        }
    }

    /// Decode a datagram payload and queue it. Malformed payloads are dropped.
    pub fn on_datagram(&mut self, payload: &[u8], now: Instant) -> bool {
        match twmn_protocol::decode(payload) {
            Ok(fields) => {
                let message = Message::from_fields(fields, &self.icons);
                self.enqueue(message, now);
                true
            }
            Err(e) => {
                warn!(error = %e, len = payload.len(), "Dropping malformed notification");
                false
            }
        }
    }

    /// Queue a message and schedule a queue check.
    pub fn enqueue(&mut self, message: Message, now: Instant) {
        debug!(
            title = message.title.as_deref().unwrap_or(""),
            queued = self.queue.len() + 1,
            "Notification queued"
        );
        self.queue.enqueue(message);
        self.schedule(TimerKind::ProcessQueue, now + QUEUE_CHECK_DELAY);
    }

    /// Fire every timer due at `now`, then advance the animation if a frame is due.
    pub fn poll(&mut self, now: Instant) {
        while let Some(kind) = self.pop_due_timer(now) {
            match kind {
                TimerKind::ProcessQueue => self.process_queue(now),
                TimerKind::ReverseStart => self.reverse_start(now),
            }
        }
        if self.next_frame.is_some_and(|at| at <= now) {
            self.frame(now);
        }
    }

    /// Earliest instant at which [`Popup::poll`] has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        let timer = self.timers.peek().map(|Reverse((at, _, _))| *at);
        match (timer, self.next_frame) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn phase(&self) -> DisplayPhase {
        if self.animation.is_running() {
            return match self.animation.direction() {
                Direction::Forward => DisplayPhase::AnimatingForward,
                Direction::Backward => DisplayPhase::AnimatingBackward,
            };
        }
        let fully_out = self.animation.remaining().is_zero();
        if self.animation.direction() == Direction::Forward && fully_out {
            DisplayPhase::Holding
        } else {
            DisplayPhase::Idle
        }
    }

    /// Width currently applied to the surface.
    pub fn width(&self) -> u32 {
        self.width.unwrap_or(0)
    }

    /// Width the current (or last) cycle animates to.
    pub fn target_width(&self) -> u32 {
        self.animation.end_value()
    }

    pub fn queue(&self) -> &MessageQueue {
        &self.queue
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Number of display cycles started.
    pub fn displayed(&self) -> u64 {
        self.displayed
    }

    pub fn anchor(&self) -> Anchor {
        self.options.anchor
    }

    fn schedule(&mut self, kind: TimerKind, at: Instant) {
        self.timer_seq += 1;
        self.timers.push(Reverse((at, self.timer_seq, kind)));
    }

    fn pop_due_timer(&mut self, now: Instant) -> Option<TimerKind> {
        let Reverse((at, _, _)) = self.timers.peek()?;
        if *at > now {
            return None;
        }
        self.timers.pop().map(|Reverse((_, _, kind))| kind)
    }

    fn can_start(&self) -> bool {
        !self.animation.is_running() && self.animation.remaining() >= START_GUARD
    }

    fn process_queue(&mut self, now: Instant) {
        let Some(head) = self.queue.peek_head() else {
            return;
        };
        if !self.can_start() {
            trace!(phase = ?self.phase(), "Popup busy, queue check deferred");
            return;
        }

        let content = ContentView::from_message(head);
        let width = content.width(self.measurer.as_ref());
        self.surface.set_content(&content);

        self.animation.set_direction(Direction::Forward);
        self.animation.set_easing(Easing::OutBounce);
        self.animation.set_range(0, width);
        self.animation.start(now);
        self.displayed += 1;
        info!(
            title = %content.title.text.trim_start(),
            width,
            queued = self.queue.len(),
            "Showing notification"
        );

        if let Some(sound) = &self.options.sound {
            sound.play();
        }
        self.frame(now);
    }

    fn reverse_start(&mut self, now: Instant) {
        self.animation.set_direction(Direction::Backward);
        self.animation.set_easing(Easing::InCubic);
        self.animation.start(now);
        debug!("Popup retracting");
        self.frame(now);
    }

    fn frame(&mut self, now: Instant) {
        let tick = self.animation.advance(now);
        self.apply_width(tick.value);
        if tick.finished {
            self.next_frame = None;
            self.animation_finished(now);
        } else {
            self.next_frame = Some(now + FRAME_INTERVAL);
        }
    }

    fn animation_finished(&mut self, now: Instant) {
        match self.animation.direction() {
            Direction::Forward => {
                // The head leaves the queue as soon as it is fully out, not when it
                // has retracted; later arrivals wait for the guard to clear.
                self.queue.dequeue_head();
                self.schedule(TimerKind::ReverseStart, now + self.options.hold);
            }
            Direction::Backward => {
                debug!(queued = self.queue.len(), "Popup retracted");
                self.schedule(TimerKind::ProcessQueue, now + QUEUE_CHECK_DELAY);
            }
        }
    }

    fn apply_width(&mut self, value: u32) {
        if self.width == Some(value) {
            return;
        }
        self.width = Some(value);
        if value == 0 {
            self.surface.hide();
            return;
        }
        self.surface.show();
        let screen = self.surface.available_size();
        let anchor = self.options.anchor;
        let rect = anchor.rect(value, self.options.height, screen);
        self.surface.set_geometry(rect);
    }
}
