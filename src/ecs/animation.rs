use bevy::prelude::*;

/// A horizontal strip of equal-width frames played over a fixed duration.
///
/// Playback is a bare elapsed-seconds accumulator; the frame shown is derived
/// from it on demand. `advance` never clamps — wraparound is handled lazily
/// by [`current_frame`](Self::current_frame), mirroring the update/draw split
/// of the game loop.
///
/// Not `Clone`: the sheet belongs to this animation. The underlying texture
/// is refcounted through its [`Handle`], so it is released when the last
/// holder drops.
pub struct SpriteStripAnimation {
    image: Handle<Image>,
    layout: Handle<TextureAtlasLayout>,
    frame_count: usize,
    duration: f32,
    elapsed: f32,
}

impl SpriteStripAnimation {
    /// `frame_count` must be at least 1 and `duration` positive; the sheet
    /// loader guarantees both.
    pub fn new(
        image: Handle<Image>,
        layout: Handle<TextureAtlasLayout>,
        frame_count: usize,
        duration: f32,
    ) -> Self {
        Self {
            image,
            layout,
            frame_count,
            duration,
            elapsed: 0.0,
        }
    }

    pub fn image(&self) -> &Handle<Image> {
        &self.image
    }

    pub fn layout(&self) -> &Handle<TextureAtlasLayout> {
        &self.layout
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Advances playback by `delta` seconds.
    pub fn advance(&mut self, delta: f32) {
        self.elapsed += delta;
    }

    /// Whether playback is mid-flight (strictly past the start).
    pub fn is_active(&self) -> bool {
        self.elapsed > 0.0
    }

    /// Whether playback has run strictly past its duration.
    pub fn is_complete(&self) -> bool {
        self.elapsed > self.duration
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    /// The frame to show right now.
    ///
    /// An overshot playback is reset first, so the returned index is always
    /// in `0..frame_count` no matter how stale the elapsed value was.
    pub fn current_frame(&mut self) -> usize {
        if self.is_complete() {
            self.reset();
        }
        let frame_time = self.duration / self.frame_count as f32;
        ((self.elapsed / frame_time) as usize).min(self.frame_count - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(frame_count: usize, duration: f32) -> SpriteStripAnimation {
        // standalone collections; nothing here is ever rendered
        let mut images = Assets::<Image>::default();
        let mut layouts = Assets::<TextureAtlasLayout>::default();
        SpriteStripAnimation::new(
            images.add(Image::default()),
            layouts.add(TextureAtlasLayout::from_grid(
                UVec2::new(128, 128),
                frame_count as u32,
                1,
                None,
                None,
            )),
            frame_count,
            duration,
        )
    }

    #[test]
    fn fresh_animation_is_inert() {
        let anim = strip(4, 1.0);
        assert!(!anim.is_active());
        assert!(!anim.is_complete());
    }

    #[test]
    fn active_and_complete_are_strict() {
        let mut anim = strip(4, 1.0);
        assert!(!anim.is_active());
        anim.advance(0.001);
        assert!(anim.is_active());

        let mut anim = strip(4, 1.0);
        anim.advance(1.0);
        // exactly at the duration is not yet complete
        assert!(!anim.is_complete());
        anim.advance(0.001);
        assert!(anim.is_complete());
    }

    #[test]
    fn reset_clears_playback() {
        let mut anim = strip(4, 1.0);
        anim.advance(2.5);
        anim.reset();
        assert!(!anim.is_active());
        assert!(!anim.is_complete());
        assert_eq!(anim.elapsed(), 0.0);
    }

    #[test]
    fn frames_progress_with_elapsed_time() {
        let mut anim = strip(4, 1.0);
        assert_eq!(anim.current_frame(), 0);
        anim.advance(0.3);
        assert_eq!(anim.current_frame(), 1);
        anim.advance(0.3);
        assert_eq!(anim.current_frame(), 2);
        anim.advance(0.3);
        assert_eq!(anim.current_frame(), 3);
    }

    #[test]
    fn frame_index_stays_in_range_after_overshoot() {
        let mut anim = strip(4, 1.0);
        anim.advance(10.0); // 10x the duration
        let frame = anim.current_frame();
        assert!(frame < 4);
        // the lazy reset wrapped playback back to the start
        assert_eq!(anim.elapsed(), 0.0);
        assert_eq!(frame, 0);
    }

    #[test]
    fn frame_index_clamped_at_exact_duration() {
        let mut anim = strip(4, 1.0);
        anim.advance(1.0);
        // elapsed == duration is not complete, so no reset happens; the
        // index must still not run off the end of the strip
        assert_eq!(anim.current_frame(), 3);
    }

    #[test]
    fn single_frame_strip_always_selects_frame_zero() {
        let mut anim = strip(1, 0.5);
        assert_eq!(anim.current_frame(), 0);
        anim.advance(0.4);
        assert_eq!(anim.current_frame(), 0);
    }
}
