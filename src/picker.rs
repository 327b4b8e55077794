//! The color wheel component.
//!
//! Lifecycle: a wheel starts `Uninitialized`. `initialize` rasterizes the
//! disc, paints it onto the attached surface in one operation and restores the
//! last picked color from durable storage; the wheel is then `Ready` and
//! accepts any number of picks. A pick reads the painted pixel back from the
//! surface, it never recomputes the color from the coordinates.

use hue_wheel_ui::{Bounds, Callback, Event, EventResult, MouseButton, Size, Surface, Widget};

use crate::color::Rgb;
use crate::config::{OutsidePolicy, WheelConfig};
use crate::constants::TRANSPARENT;
use crate::error::{WheelError, WheelResult};
use crate::raster::WheelRaster;
#[cfg(not(target_arch = "wasm32"))]
use crate::storage::FileStore;
use crate::storage::{KeyValueStore, MemoryStore, StorageError};

/// Lifecycle state of a wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelState {
    /// No surface attached, nothing painted; picks are refused
    Uninitialized,
    /// Raster painted; picks are accepted
    Ready,
}

/// Why a pick produced no color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The pointer was outside the surface's bounding box
    OutsideSurface,
    /// The pointer was on the surface but off the painted disc
    OutsideDisc,
}

/// Result of sampling the surface under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    Picked(Rgb),
    Rejected(RejectReason),
}

impl PickOutcome {
    /// The picked color, if any.
    pub fn color(&self) -> Option<Rgb> {
        match self {
            PickOutcome::Picked(color) => Some(*color),
            PickOutcome::Rejected(_) => None,
        }
    }
}

/// A hue/saturation color wheel painted on a surface.
///
/// `M` is the application message produced when a color is picked.
pub struct ColorWheel<M> {
    config: WheelConfig,
    raster: WheelRaster,
    surface: Option<Box<dyn Surface>>,
    store: Box<dyn KeyValueStore>,
    /// Last picked color and its `rgb(r, g, b)` display form
    current: Option<(Rgb, String)>,
    on_pick: Callback<Rgb, M>,
}

impl<M> ColorWheel<M> {
    /// Create an uninitialized wheel backed by the given durable store.
    pub fn new(config: WheelConfig, store: Box<dyn KeyValueStore>) -> WheelResult<Self> {
        let raster = WheelRaster::new(config.side)?;
        Ok(Self {
            config,
            raster,
            surface: None,
            store,
            current: None,
            on_pick: Callback::none(),
        })
    }

    /// Create a wheel from the config file and store at their default paths.
    ///
    /// A missing or unreadable config falls back to defaults, which are then
    /// written out so the next start finds an editable file.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn open_default() -> WheelResult<Self> {
        let config = match WheelConfig::load_from_default_path() {
            Some(config) => config,
            None => {
                let config = WheelConfig::default();
                if let Err(e) = config.save_to_default_path() {
                    log::warn!("Failed to write default config: {}", e);
                }
                config
            }
        };
        let store = FileStore::open_default()?;
        Self::new(config, Box::new(store))
    }

    /// Create a wheel whose picks are only remembered for the process lifetime.
    pub fn in_memory(config: WheelConfig) -> WheelResult<Self> {
        Self::new(config, Box::new(MemoryStore::new()))
    }

    /// Set the pick notification callback.
    pub fn on_pick<F>(mut self, handler: F) -> Self
    where
        F: Fn(Rgb) -> M + 'static,
    {
        self.on_pick = Callback::new(handler);
        self
    }

    pub fn state(&self) -> WheelState {
        if self.surface.is_some() && self.raster.is_rendered() {
            WheelState::Ready
        } else {
            WheelState::Uninitialized
        }
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn raster(&self) -> &WheelRaster {
        &self.raster
    }

    /// The attached surface, once initialized.
    pub fn surface(&self) -> Option<&dyn Surface> {
        self.surface.as_deref()
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// Displayed value of the last pick, formatted `rgb(r, g, b)`.
    pub fn display_value(&self) -> Option<&str> {
        self.current.as_ref().map(|(_, text)| text.as_str())
    }

    /// Last picked color.
    pub fn current(&self) -> Option<Rgb> {
        self.current.as_ref().map(|(color, _)| *color)
    }

    /// Attach a surface, paint the wheel and restore the last picked color.
    ///
    /// Calling this again repaints onto the new surface and re-reads the
    /// displayed value from durable storage.
    pub fn initialize(&mut self, mut surface: Box<dyn Surface>) -> WheelResult<()> {
        let expected = (self.raster.side(), self.raster.side());
        let actual = surface.size();
        if actual != expected {
            return Err(WheelError::SurfaceSizeMismatch { expected, actual });
        }

        surface.put_image(self.raster.render())?;
        self.surface = Some(surface);
        self.current = self.restore();

        log::info!(
            "Color wheel ready ({}x{}, restored {:?})",
            expected.0,
            expected.1,
            self.display_value()
        );
        Ok(())
    }

    /// Read the persisted color; unreadable or malformed entries count as none.
    fn restore(&self) -> Option<(Rgb, String)> {
        let stored = match self.store.get(&self.config.storage_key) {
            Ok(stored) => stored?,
            Err(e) => {
                log::warn!("Failed to read last color: {}", e);
                return None;
            }
        };
        match stored.parse::<Rgb>() {
            Ok(color) => Some((color, color.to_string())),
            Err(e) => {
                log::warn!("Ignoring stored color: {}", e);
                None
            }
        }
    }

    /// Sample the painted surface under a screen position without committing.
    pub fn sample(&self, screen_x: f32, screen_y: f32) -> WheelResult<PickOutcome> {
        let surface = match &self.surface {
            Some(surface) if self.raster.is_rendered() => surface,
            _ => return Err(WheelError::NotInitialized),
        };

        if !screen_x.is_finite() || !screen_y.is_finite() {
            log::debug!("Ignoring non-finite pick at ({}, {})", screen_x, screen_y);
            return Ok(PickOutcome::Rejected(RejectReason::OutsideSurface));
        }

        let bounds = surface.bounds();
        let (x, y) = surface_local(surface.as_ref(), bounds, screen_x, screen_y);
        let on_surface = bounds.contains(screen_x, screen_y);

        let (px, py) = match self.config.outside_policy {
            OutsidePolicy::Clamp => self.raster.nearest_inside(x, y),
            _ if !on_surface => {
                log::debug!("Pick at ({}, {}) is outside the surface", screen_x, screen_y);
                return Ok(PickOutcome::Rejected(RejectReason::OutsideSurface));
            }
            OutsidePolicy::Reject | OutsidePolicy::Passthrough => (x as u32, y as u32),
        };

        let Some(pixel) = surface.read_pixel(px, py)? else {
            return Ok(PickOutcome::Rejected(RejectReason::OutsideSurface));
        };

        if pixel.0[3] == TRANSPARENT && self.config.outside_policy == OutsidePolicy::Reject {
            log::debug!("Pick at local ({}, {}) is off the disc", px, py);
            return Ok(PickOutcome::Rejected(RejectReason::OutsideDisc));
        }

        let color = Rgb::from_rgba(pixel);
        log::trace!("Sampled {} at local ({}, {})", color, px, py);
        Ok(PickOutcome::Picked(color))
    }

    /// Make `color` the displayed value and persist it, overwriting the slot.
    ///
    /// The displayed value is updated even when persisting fails.
    pub fn commit(&mut self, color: Rgb) -> Result<(), StorageError> {
        let text = color.to_string();
        let result = self.store.set(&self.config.storage_key, &text);
        if let Err(e) = &result {
            log::warn!("Failed to persist {}: {}", text, e);
        }
        log::debug!("Picked {}", text);
        self.current = Some((color, text));
        result
    }

    /// Sample under a screen position and commit the color if one was picked.
    pub fn pick(&mut self, screen_x: f32, screen_y: f32) -> WheelResult<PickOutcome> {
        let outcome = self.sample(screen_x, screen_y)?;
        if let PickOutcome::Picked(color) = outcome {
            self.commit(color)?;
        }
        Ok(outcome)
    }

    /// Handle a pointer event, returning the pick notification.
    ///
    /// Only a left-button release (a completed click) picks. A failure to
    /// persist is logged and the notification is still emitted.
    pub fn handle_event(&mut self, event: &Event) -> EventResult<M> {
        let Event::MouseRelease {
            button: MouseButton::Left,
            position: (x, y),
        } = *event
        else {
            return EventResult::None;
        };

        let color = match self.sample(x, y) {
            Ok(PickOutcome::Picked(color)) => color,
            Ok(PickOutcome::Rejected(_)) => return EventResult::None,
            Err(e) => {
                log::error!("Color wheel pick failed: {}", e);
                return EventResult::None;
            }
        };

        // commit already logged the storage failure
        self.commit(color).ok();
        self.on_pick.call(color).into()
    }

    /// Forget the last pick, both displayed and persisted.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.current = None;
        self.store.remove(&self.config.storage_key)
    }
}

/// Translate a screen position into surface pixel coordinates.
///
/// Accounts for a surface displayed at a different size than its pixel
/// dimensions (e.g. a CSS-scaled canvas).
fn surface_local(surface: &dyn Surface, bounds: Bounds, x: f32, y: f32) -> (f32, f32) {
    let (lx, ly) = bounds.to_local(x, y);
    let (width, height) = surface.size();
    let scale_x = if bounds.width > 0.0 {
        width as f32 / bounds.width
    } else {
        1.0
    };
    let scale_y = if bounds.height > 0.0 {
        height as f32 / bounds.height
    } else {
        1.0
    };
    (lx * scale_x, ly * scale_y)
}

impl<M> Widget<M> for ColorWheel<M> {
    fn layout(&mut self, _available: Size) -> Size {
        Size::square(self.raster.side() as f32)
    }

    /// The surface reports its own on-screen box, so `bounds` is not used.
    fn on_event(&mut self, event: &Event, _bounds: Bounds) -> EventResult<M> {
        self.handle_event(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::hsv_to_rgb;
    use crate::constants::LAST_COLOR_KEY;
    use hue_wheel_ui::{ImageSurface, SurfaceError};
    use image::{Rgba, RgbaImage};
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Message {
        Picked(String),
    }

    fn ready_wheel(policy: OutsidePolicy) -> ColorWheel<Message> {
        let config = WheelConfig::new().with_outside_policy(policy);
        let mut wheel = ColorWheel::in_memory(config)
            .unwrap()
            .on_pick(|color| Message::Picked(color.to_string()));
        wheel
            .initialize(Box::new(ImageSurface::new(300, 300).at(100.0, 50.0)))
            .unwrap();
        wheel
    }

    /// Store that refuses every write.
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Backend("read-only".to_string()))
        }

        fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Backend("read-only".to_string()))
        }
    }

    /// Surface that counts paints in a counter shared with the test.
    struct CountingSurface {
        inner: ImageSurface,
        paints: Rc<Cell<usize>>,
    }

    impl CountingSurface {
        fn new(paints: &Rc<Cell<usize>>) -> Self {
            Self {
                inner: ImageSurface::new(300, 300),
                paints: Rc::clone(paints),
            }
        }
    }

    impl Surface for CountingSurface {
        fn size(&self) -> (u32, u32) {
            self.inner.size()
        }

        fn bounds(&self) -> Bounds {
            self.inner.bounds()
        }

        fn put_image(&mut self, image: &RgbaImage) -> Result<(), SurfaceError> {
            self.inner.put_image(image)?;
            self.paints.set(self.paints.get() + 1);
            Ok(())
        }

        fn read_pixel(&self, x: u32, y: u32) -> Result<Option<Rgba<u8>>, SurfaceError> {
            self.inner.read_pixel(x, y)
        }
    }

    #[test]
    fn test_starts_uninitialized() {
        let mut wheel: ColorWheel<Message> = ColorWheel::in_memory(WheelConfig::default()).unwrap();
        assert_eq!(wheel.state(), WheelState::Uninitialized);
        assert!(matches!(
            wheel.pick(10.0, 10.0),
            Err(WheelError::NotInitialized)
        ));
        assert!(wheel.handle_event(&Event::left_click(150.0, 150.0)).is_none());
    }

    #[test]
    fn test_rejects_invalid_config_side() {
        let result: WheelResult<ColorWheel<Message>> =
            ColorWheel::in_memory(WheelConfig::new().with_side(7));
        assert!(matches!(result, Err(WheelError::InvalidSide { side: 7 })));
    }

    #[test]
    fn test_initialize_rejects_wrong_surface_size() {
        let mut wheel: ColorWheel<Message> = ColorWheel::in_memory(WheelConfig::default()).unwrap();
        let err = wheel
            .initialize(Box::new(ImageSurface::new(200, 300)))
            .unwrap_err();
        assert!(matches!(
            err,
            WheelError::SurfaceSizeMismatch {
                expected: (300, 300),
                actual: (200, 300)
            }
        ));
        assert_eq!(wheel.state(), WheelState::Uninitialized);
    }

    #[test]
    fn test_initialize_paints_raster() {
        let wheel = ready_wheel(OutsidePolicy::Reject);
        assert_eq!(wheel.state(), WheelState::Ready);
        let surface = wheel.surface().unwrap();
        assert_eq!(
            surface.read_pixel(150, 150).unwrap(),
            Some(image::Rgba([255, 255, 255, 255]))
        );
        assert_eq!(surface.read_pixel(0, 0).unwrap().unwrap().0[3], TRANSPARENT);
    }

    #[test]
    fn test_pick_translates_screen_coordinates() {
        let mut wheel = ready_wheel(OutsidePolicy::Reject);
        // Surface origin is (100, 50); center pixel is local (150, 150)
        let outcome = wheel.pick(250.0, 200.0).unwrap();
        assert_eq!(outcome, PickOutcome::Picked(Rgb::WHITE));
        assert_eq!(wheel.display_value(), Some("rgb(255, 255, 255)"));
    }

    #[test]
    fn test_pick_matches_analytic_color() {
        let mut wheel = ready_wheel(OutsidePolicy::Reject);
        for (dx, dy) in [(-100i32, 0i32), (40, -90), (0, 120), (-70, -70), (10, 3)] {
            let (lx, ly) = ((150 + dx) as u32, (150 + dy) as u32);
            let hsv = wheel.raster().hsv_at(lx, ly).unwrap();
            let expected = hsv_to_rgb(hsv.hue, hsv.saturation, hsv.value);
            let picked = wheel
                .pick(100.0 + lx as f32 + 0.5, 50.0 + ly as f32 + 0.5)
                .unwrap()
                .color()
                .unwrap();
            assert!(
                picked.max_channel_diff(expected) <= 1,
                "offset ({}, {}): {} vs {}",
                dx,
                dy,
                picked,
                expected
            );
        }
    }

    #[test]
    fn test_pick_persists_display_value() {
        let mut wheel = ready_wheel(OutsidePolicy::Reject);
        wheel.pick(100.0 + 20.0, 50.0 + 150.0).unwrap();
        let stored = wheel.store().get(LAST_COLOR_KEY).unwrap();
        assert_eq!(stored.as_deref(), wheel.display_value());

        // Last write wins
        wheel.pick(250.0, 200.0).unwrap();
        let stored = wheel.store().get(LAST_COLOR_KEY).unwrap();
        assert_eq!(stored.as_deref(), Some("rgb(255, 255, 255)"));
    }

    #[test]
    fn test_click_emits_same_string_as_stored() {
        let mut wheel = ready_wheel(OutsidePolicy::Reject);
        let result = wheel.handle_event(&Event::left_click(130.0, 120.0));
        let Some(Message::Picked(text)) = result.into_message() else {
            panic!("expected a pick message");
        };
        let stored = wheel.store().get(LAST_COLOR_KEY).unwrap();
        assert_eq!(stored.as_deref(), Some(text.as_str()));
        assert_eq!(wheel.display_value(), Some(text.as_str()));
    }

    #[test]
    fn test_other_events_do_not_pick() {
        let mut wheel = ready_wheel(OutsidePolicy::Reject);
        let events = [
            Event::MousePress {
                button: MouseButton::Left,
                position: (250.0, 200.0),
            },
            Event::MouseRelease {
                button: MouseButton::Right,
                position: (250.0, 200.0),
            },
            Event::MouseMove {
                position: (250.0, 200.0),
            },
        ];
        for event in &events {
            assert!(wheel.handle_event(event).is_none());
        }
        assert_eq!(wheel.display_value(), None);
    }

    #[test]
    fn test_reject_policy_ignores_corner_and_outside() {
        let mut wheel = ready_wheel(OutsidePolicy::Reject);
        wheel.pick(250.0, 200.0).unwrap();

        // Surface corner: on the surface, off the disc
        assert_eq!(
            wheel.pick(101.0, 51.0).unwrap(),
            PickOutcome::Rejected(RejectReason::OutsideDisc)
        );
        // Left of the surface entirely
        assert_eq!(
            wheel.pick(50.0, 200.0).unwrap(),
            PickOutcome::Rejected(RejectReason::OutsideSurface)
        );
        // Right edge is exclusive
        assert_eq!(
            wheel.pick(400.0, 200.0).unwrap(),
            PickOutcome::Rejected(RejectReason::OutsideSurface)
        );
        assert!(wheel.handle_event(&Event::left_click(101.0, 51.0)).is_none());
        // Previous pick is untouched
        assert_eq!(wheel.display_value(), Some("rgb(255, 255, 255)"));
    }

    #[test]
    fn test_passthrough_reads_transparent_pixel() {
        let mut wheel = ready_wheel(OutsidePolicy::Passthrough);
        assert_eq!(
            wheel.pick(101.0, 51.0).unwrap(),
            PickOutcome::Picked(Rgb::BLACK)
        );
        assert_eq!(wheel.display_value(), Some("rgb(0, 0, 0)"));
        assert_eq!(
            wheel.pick(0.0, 0.0).unwrap(),
            PickOutcome::Rejected(RejectReason::OutsideSurface)
        );
    }

    #[test]
    fn test_clamp_policy_uses_nearest_disc_pixel() {
        let mut wheel = ready_wheel(OutsidePolicy::Clamp);
        // Far left of the surface on the center row: projects onto local (1, 150)
        let picked = wheel.pick(-500.0, 200.0).unwrap().color().unwrap();
        let hsv = wheel.raster().hsv_at(1, 150).unwrap();
        let expected = hsv_to_rgb(hsv.hue, hsv.saturation, hsv.value);
        assert!(picked.max_channel_diff(expected) <= 1, "{} vs {}", picked, expected);

        let corner = wheel.pick(101.0, 51.0).unwrap();
        assert!(corner.color().is_some());
    }

    #[test]
    fn test_storage_failure_still_notifies() {
        let mut wheel = ColorWheel::new(WheelConfig::default(), Box::new(ReadOnlyStore))
            .unwrap()
            .on_pick(|color| Message::Picked(color.to_string()));
        wheel
            .initialize(Box::new(ImageSurface::new(300, 300)))
            .unwrap();

        assert!(matches!(
            wheel.pick(150.0, 150.0),
            Err(WheelError::Storage(_))
        ));
        assert_eq!(wheel.display_value(), Some("rgb(255, 255, 255)"));

        let result = wheel.handle_event(&Event::left_click(150.0, 150.0));
        assert_eq!(
            result.into_message(),
            Some(Message::Picked("rgb(255, 255, 255)".to_string()))
        );
    }

    #[test]
    fn test_initialize_restores_persisted_value() {
        let store = MemoryStore::with_entry(LAST_COLOR_KEY, "rgb(1, 2, 3)");
        let mut wheel: ColorWheel<Message> =
            ColorWheel::new(WheelConfig::default(), Box::new(store)).unwrap();
        assert_eq!(wheel.display_value(), None);
        wheel
            .initialize(Box::new(ImageSurface::new(300, 300)))
            .unwrap();
        assert_eq!(wheel.display_value(), Some("rgb(1, 2, 3)"));
        assert_eq!(wheel.current(), Some(Rgb::new(1, 2, 3)));
    }

    #[test]
    fn test_initialize_ignores_malformed_persisted_value() {
        let store = MemoryStore::with_entry(LAST_COLOR_KEY, "chartreuse");
        let mut wheel: ColorWheel<Message> =
            ColorWheel::new(WheelConfig::default(), Box::new(store)).unwrap();
        wheel
            .initialize(Box::new(ImageSurface::new(300, 300)))
            .unwrap();
        assert_eq!(wheel.display_value(), None);
    }

    #[test]
    fn test_reinitialize_repaints_identically() {
        let mut wheel = ready_wheel(OutsidePolicy::Reject);
        let first = wheel.raster().buffer().clone();
        wheel.pick(250.0, 200.0).unwrap();

        wheel
            .initialize(Box::new(ImageSurface::new(300, 300)))
            .unwrap();
        assert_eq!(wheel.raster().buffer().as_raw(), first.as_raw());
        // Displayed value is re-read from storage, which kept the last pick
        assert_eq!(wheel.display_value(), Some("rgb(255, 255, 255)"));
        // New surface sits at the origin
        assert_eq!(wheel.pick(150.0, 150.0).unwrap(), PickOutcome::Picked(Rgb::WHITE));
    }

    #[test]
    fn test_clear_forgets_pick() {
        let mut wheel = ready_wheel(OutsidePolicy::Reject);
        wheel.pick(250.0, 200.0).unwrap();
        wheel.clear().unwrap();
        assert_eq!(wheel.display_value(), None);
        assert_eq!(wheel.store().get(LAST_COLOR_KEY).unwrap(), None);
    }

    #[test]
    fn test_layout_is_square_side() {
        let mut wheel = ready_wheel(OutsidePolicy::Reject);
        assert_eq!(
            <ColorWheel<Message> as Widget<Message>>::layout(&mut wheel, Size::new(1000.0, 1000.0)),
            Size::square(300.0)
        );
    }

    #[test]
    fn test_paints_once_per_initialize() {
        let paints = Rc::new(Cell::new(0));
        let mut wheel: ColorWheel<Message> = ColorWheel::in_memory(WheelConfig::default()).unwrap();
        wheel
            .initialize(Box::new(CountingSurface::new(&paints)))
            .unwrap();
        assert_eq!(paints.get(), 1);

        wheel.pick(150.0, 150.0).unwrap();
        wheel.pick(20.0, 150.0).unwrap();
        wheel.pick(0.0, 0.0).unwrap();
        wheel.handle_event(&Event::left_click(150.0, 40.0));
        assert_eq!(paints.get(), 1);

        wheel
            .initialize(Box::new(CountingSurface::new(&paints)))
            .unwrap();
        assert_eq!(paints.get(), 2);
    }

    #[test]
    fn test_wrong_size_surface_is_never_painted() {
        let paints = Rc::new(Cell::new(0));
        let mut wheel: ColorWheel<Message> =
            ColorWheel::in_memory(WheelConfig::new().with_side(200)).unwrap();
        assert!(wheel
            .initialize(Box::new(CountingSurface::new(&paints)))
            .is_err());
        assert_eq!(paints.get(), 0);
    }

    #[test]
    fn test_non_finite_positions_are_rejected() {
        let positions = [
            (f32::NAN, 200.0),
            (250.0, f32::NAN),
            (f32::INFINITY, 200.0),
            (250.0, f32::NEG_INFINITY),
        ];
        for policy in [
            OutsidePolicy::Reject,
            OutsidePolicy::Clamp,
            OutsidePolicy::Passthrough,
        ] {
            let mut wheel = ready_wheel(policy);
            for (x, y) in positions {
                assert_eq!(
                    wheel.pick(x, y).unwrap(),
                    PickOutcome::Rejected(RejectReason::OutsideSurface),
                    "{:?} at ({}, {})",
                    policy,
                    x,
                    y
                );
                assert!(wheel.handle_event(&Event::left_click(x, y)).is_none());
            }
            assert_eq!(wheel.display_value(), None);
            assert_eq!(wheel.store().get(LAST_COLOR_KEY).unwrap(), None);
        }
    }
}
