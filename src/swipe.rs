use crate::constants::SWIPE_THRESHOLD;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Next, // Finger moved left
    Prev, // Finger moved right
}

/// Horizontal swipe recognizer. Attached to a widget to enable touch navigation.
#[derive(Debug, Clone, Default)]
pub struct SwipeGesture {
    start_x: Option<f32>,
}

impl SwipeGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn touch_start(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Forgets a started gesture, so the next touch end does nothing.
    pub fn cancel(&mut self) {
        self.start_x = None;
    }

    /// Ends the gesture. Travel beyond the threshold in either direction yields
    /// a direction; anything shorter, or an end without a start, yields nothing.
    pub fn touch_end(&mut self, x: f32) -> Option<SwipeDirection> {
        let distance = self.start_x.take()? - x;
        if distance > SWIPE_THRESHOLD {
            Some(SwipeDirection::Next)
        } else if distance < -SWIPE_THRESHOLD {
            Some(SwipeDirection::Prev)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe(from: f32, to: f32) -> Option<SwipeDirection> {
        let mut gesture = SwipeGesture::new();
        gesture.touch_start(from);
        gesture.touch_end(to)
    }

    #[test]
    fn left_swipe_is_next() {
        assert_eq!(swipe(400.0, 250.0), Some(SwipeDirection::Next));
    }

    #[test]
    fn right_swipe_is_prev() {
        assert_eq!(swipe(100.0, 250.0), Some(SwipeDirection::Prev));
    }

    #[test]
    fn short_swipes_are_ignored() {
        assert_eq!(swipe(300.0, 350.0), None);
        assert_eq!(swipe(300.0, 200.0), None);
    }

    #[test]
    fn end_without_start_is_ignored() {
        let mut gesture = SwipeGesture::new();
        assert_eq!(gesture.touch_end(0.0), None);

        gesture.touch_start(500.0);
        assert_eq!(gesture.touch_end(0.0), Some(SwipeDirection::Next));
        assert_eq!(gesture.touch_end(0.0), None);
    }

    #[test]
    fn cancelled_gesture_is_ignored() {
        let mut gesture = SwipeGesture::new();
        gesture.touch_start(500.0);
        gesture.cancel();
        assert_eq!(gesture.touch_end(0.0), None);
    }
}
