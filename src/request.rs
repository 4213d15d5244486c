//! Mode change requests from other execution contexts
//!
//! Button and serial handlers may run in interrupts or other tasks. They
//! queue [`ModeRequest`]s here, and the control loop applies them between
//! ticks, so the controller keeps sole ownership of the ring.
//!
//! The queue is a fixed-size `heapless::Deque` behind a `critical-section`
//! mutex.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::mode::Mode;

/// A request to switch the ring to `mode`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeRequest {
    pub mode: Mode,
    /// Restart the animation even if `mode` is already active
    pub force_restart: bool,
}

impl ModeRequest {
    pub const fn new(mode: Mode) -> Self {
        Self {
            mode,
            force_restart: false,
        }
    }

    pub const fn restart(mode: Mode) -> Self {
        Self {
            mode,
            force_restart: true,
        }
    }
}

impl From<Mode> for ModeRequest {
    fn from(mode: Mode) -> Self {
        Self::new(mode)
    }
}

/// Returned when the queue has no room left; carries the rejected request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFull(pub ModeRequest);

/// Bounded queue of pending mode requests
pub struct RequestChannel<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<ModeRequest, SIZE>>>,
}

impl<const SIZE: usize> RequestChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Handle for producers (button, serial, remote handlers)
    pub const fn sender(&self) -> RequestSender<'_, SIZE> {
        RequestSender { channel: self }
    }

    /// Handle for the control loop
    pub const fn receiver(&self) -> RequestReceiver<'_, SIZE> {
        RequestReceiver { channel: self }
    }

    /// Queue a request, failing if the queue is full
    pub fn try_send(&self, request: ModeRequest) -> Result<(), QueueFull> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(request).map_err(|rejected| {
                #[cfg(feature = "esp32-log")]
                println!(
                    "[RequestChannel.try_send] queue full, dropping {}",
                    rejected.mode.as_str()
                );
                QueueFull(rejected)
            })
        })
    }

    /// Take the oldest pending request
    pub fn try_receive(&self) -> Option<ModeRequest> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }

    /// Number of requests waiting
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for RequestChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
pub struct RequestSender<'a, const SIZE: usize> {
    channel: &'a RequestChannel<SIZE>,
}

impl<const SIZE: usize> RequestSender<'_, SIZE> {
    pub fn try_send(&self, request: impl Into<ModeRequest>) -> Result<(), QueueFull> {
        self.channel.try_send(request.into())
    }
}

#[derive(Clone, Copy)]
pub struct RequestReceiver<'a, const SIZE: usize> {
    channel: &'a RequestChannel<SIZE>,
}

impl<const SIZE: usize> RequestReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Option<ModeRequest> {
        self.channel.try_receive()
    }
}
