use std::time::Duration;

use log::{debug, info};

use crate::controls::Glyph;
use crate::slide::{Indicator, Slide};
use crate::state::PlaybackState;
use crate::timer::IntervalTimer;

/// Slide-index state machine with its auto-advance timer. Knows nothing
/// about windows or input; `CarouselWidget` wires it to those.
pub struct Carousel<T> {
    slides: Vec<Slide<T>>,
    indicators: Vec<Indicator>,
    current: usize,
    state: PlaybackState,
    timer: Option<IntervalTimer>,
    interval: Duration,
}

impl<T> Carousel<T> {
    /// Builds the carousel with the first slide active and starts playing.
    /// Over an empty collection the carousel is inert.
    pub fn new(items: Vec<T>, interval: Duration) -> Self {
        let mut slides: Vec<Slide<T>> = items.into_iter().map(Slide::new).collect();
        let mut indicators: Vec<Indicator> = (0..slides.len())
            .map(|slide_to| Indicator { slide_to, active: false })
            .collect();

        if let Some(first) = slides.first_mut() {
            first.active = true;
            indicators[0].active = true;
        }

        Self {
            slides,
            indicators,
            current: 0,
            state: PlaybackState::Playing,
            timer: Some(IntervalTimer::new(interval)),
            interval,
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn indicators(&self) -> &[Indicator] {
        &self.indicators
    }

    pub fn current_slide(&self) -> Option<&Slide<T>> {
        self.slides.get(self.current)
    }

    /// Glyph currently shown on the pause/play button.
    pub fn pause_glyph(&self) -> Glyph {
        if self.is_playing() { Glyph::Pause } else { Glyph::Play }
    }

    pub fn next(&mut self) {
        self.pause();
        self.advance();
    }

    pub fn prev(&mut self) {
        self.pause();
        let count = self.slides.len();
        if count > 0 {
            self.show((self.current + count - 1) % count);
        }
    }

    /// Jumps to slide `n`, wrapping any integer (negative included) into range.
    pub fn go_to(&mut self, n: i64) {
        let count = self.slides.len() as i64;
        if count > 0 {
            self.show(n.rem_euclid(count) as usize);
        }
    }

    /// Indicator click: pause, then jump to the indicator's slide.
    pub fn select(&mut self, slide_to: usize) {
        self.pause();
        self.go_to(slide_to as i64);
    }

    pub fn pause_play(&mut self) {
        self.state = self.state.toggled();
        match self.state {
            PlaybackState::Paused => {
                self.timer = None;
                info!("Carousel paused on slide {}", self.current);
            }
            PlaybackState::Playing => {
                // Replacing the handle cancels any previous timer.
                self.timer = Some(IntervalTimer::new(self.interval));
                info!("Carousel playing every {:?}", self.interval);
            }
        }
    }

    /// Feeds `dt` seconds of frame time to the timer and advances once per
    /// elapsed interval.
    pub fn tick(&mut self, dt: f32) {
        if self.is_empty() {
            return;
        }
        let fired = match self.timer.as_mut() {
            Some(timer) => timer.tick(dt),
            None => return,
        };
        for _ in 0..fired {
            self.advance();
        }
    }

    fn pause(&mut self) {
        if self.is_playing() {
            self.pause_play();
        }
    }

    fn advance(&mut self) {
        let count = self.slides.len();
        if count > 0 {
            self.show((self.current + 1) % count);
        }
    }

    fn show(&mut self, index: usize) {
        self.slides[self.current].active = false;
        self.indicators[self.current].active = false;
        self.current = index;
        self.slides[self.current].active = true;
        self.indicators[self.current].active = true;
        debug!("Showing slide {}/{}", self.current + 1, self.slides.len());
    }
}

#[cfg(test)]
impl<T> Carousel<T> {
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn slides(&self) -> &[Slide<T>] {
        &self.slides
    }

    pub fn timer(&self) -> Option<&IntervalTimer> {
        self.timer.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn carousel(count: usize) -> Carousel<()> {
        Carousel::new(vec![(); count], Duration::from_millis(2000))
    }

    fn assert_single_active(c: &Carousel<()>) {
        let slides: Vec<usize> = c
            .slides()
            .iter()
            .enumerate()
            .filter(|(_, s)| s.active)
            .map(|(i, _)| i)
            .collect();
        let dots: Vec<usize> =
            c.indicators().iter().filter(|i| i.active).map(|i| i.slide_to).collect();
        assert_eq!(slides, vec![c.current()]);
        assert_eq!(dots, vec![c.current()]);
    }

    #[test]
    fn starts_playing_on_first_slide() {
        let c = carousel(3);
        assert_eq!(c.current(), 0);
        assert!(c.is_playing());
        assert_eq!(c.pause_glyph(), Glyph::Pause);
        assert_single_active(&c);
        let targets: Vec<usize> = c.indicators().iter().map(|i| i.slide_to).collect();
        assert_eq!(targets, vec![0, 1, 2]);
    }

    #[test]
    fn four_slide_scenario() {
        let mut c = carousel(4);
        c.tick(2.0);
        assert_eq!(c.current(), 1);
        assert!(c.is_playing());

        c.go_to(0);
        c.prev();
        assert_eq!(c.current(), 3);
        assert!(!c.is_playing());
        assert_single_active(&c);
    }

    #[test]
    fn timer_only_advances_while_playing() {
        let mut c = carousel(4);
        c.pause_play();
        assert!(c.timer().is_none());
        assert_eq!(c.pause_glyph(), Glyph::Play);
        c.tick(10.0);
        assert_eq!(c.current(), 0);

        c.pause_play();
        c.tick(4.0);
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn next_and_prev_always_pause() {
        let mut c = carousel(4);
        c.next();
        assert_eq!(c.state(), PlaybackState::Paused);
        assert_eq!(c.current(), 1);

        c.pause_play();
        c.prev();
        assert_eq!(c.state(), PlaybackState::Paused);
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn pause_is_idempotent() {
        let mut c = carousel(2);
        c.next();
        c.next();
        assert!(!c.is_playing());
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn pause_play_twice_restores_cadence() {
        let mut c = carousel(4);
        c.tick(1.5);
        c.pause_play();
        c.pause_play();

        assert!(c.is_playing());
        let timer = c.timer().unwrap();
        assert_eq!(timer.interval(), Duration::from_millis(2000));
        assert_eq!(timer.elapsed(), Duration::ZERO);

        // Remaining time before the pause is not preserved.
        c.tick(1.5);
        assert_eq!(c.current(), 0);
        c.tick(0.5);
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn go_to_wraps_any_integer() {
        let mut c = carousel(4);
        for n in [-9_i64, -4, -1, 0, 3, 4, 7, 1_000_001, i64::MIN, i64::MAX] {
            c.go_to(n);
            assert_eq!(c.current() as i64, ((n % 4) + 4) % 4);
            assert_single_active(&c);
        }
    }

    #[test]
    fn select_pauses_then_jumps() {
        let mut c = carousel(5);
        c.select(3);
        assert_eq!(c.current(), 3);
        assert!(!c.is_playing());
        assert_single_active(&c);
    }

    #[test]
    fn random_navigation_keeps_invariants() {
        let mut rng = StdRng::seed_from_u64(7);
        for count in 1..=6 {
            let mut c = carousel(count);
            for _ in 0..200 {
                match rng.random_range(0..5) {
                    0 => c.next(),
                    1 => c.prev(),
                    2 => c.pause_play(),
                    3 => c.go_to(rng.random_range(-50..50)),
                    _ => c.tick(rng.random_range(0.0..5.0)),
                }
                assert!(c.current() < count);
                assert_single_active(&c);
            }
        }
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut c = carousel(0);
        c.next();
        c.prev();
        c.go_to(-3);
        c.select(2);
        c.pause_play();
        c.tick(100.0);
        assert_eq!(c.current(), 0);
        assert!(c.current_slide().is_none());
        assert!(c.indicators().is_empty());
    }
}
