//! Display hardware enumeration.
//!
//! These queries (primary display device, refresh rate, screen resolution)
//! only have OS-level answers on some platforms. Where the platform cannot
//! answer, the probe returns `None` and the UI renders a predeclared
//! placeholder; nothing is guessed.

/// Display hardware facts, each optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayInfo {
    pub device: Option<String>,
    pub refresh_hz: Option<u32>,
    pub resolution: Option<(u32, u32)>,
}

/// Abstraction over display hardware queries.
pub trait DisplayProbe {
    /// Name of the primary display adapter.
    fn primary_display_device(&self) -> Option<String>;

    /// Refresh rate of the primary display in Hz.
    fn display_refresh_rate(&self) -> Option<u32>;

    /// Screen resolution as (width, height).
    fn screen_resolution(&self) -> Option<(u32, u32)>;
}

/// Collects all display facts from a probe.
pub fn probe_display(probe: &dyn DisplayProbe) -> DisplayInfo {
    DisplayInfo {
        device: probe.primary_display_device(),
        refresh_hz: probe.display_refresh_rate(),
        resolution: probe.screen_resolution(),
    }
}

/// Probe for the current platform.
///
/// No supported platform query is wired up yet, so every answer is `None`
/// and the Display tab shows placeholders throughout.
#[derive(Debug, Default)]
pub struct PlatformDisplay;

impl PlatformDisplay {
    pub fn new() -> Self {
        Self
    }
}

impl DisplayProbe for PlatformDisplay {
    fn primary_display_device(&self) -> Option<String> {
        None
    }

    fn display_refresh_rate(&self) -> Option<u32> {
        None
    }

    fn screen_resolution(&self) -> Option<(u32, u32)> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeDisplay;

    impl DisplayProbe for FakeDisplay {
        fn primary_display_device(&self) -> Option<String> {
            Some("Iris Xe Graphics".to_string())
        }

        fn display_refresh_rate(&self) -> Option<u32> {
            Some(144)
        }

        fn screen_resolution(&self) -> Option<(u32, u32)> {
            Some((2560, 1440))
        }
    }

    #[test]
    fn test_probe_display_collects_all_fields() {
        let info = probe_display(&FakeDisplay);
        assert_eq!(info.device.as_deref(), Some("Iris Xe Graphics"));
        assert_eq!(info.refresh_hz, Some(144));
        assert_eq!(info.resolution, Some((2560, 1440)));
    }

    #[test]
    fn test_platform_display_answers_none() {
        let info = probe_display(&PlatformDisplay::new());
        assert_eq!(info, DisplayInfo::default());
    }
}
