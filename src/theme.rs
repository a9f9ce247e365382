use std::{fmt, str::FromStr};

use thiserror::Error;

/// Key the chosen theme is persisted under.
pub const THEME_STORAGE_KEY: &str = "theme";
/// Attribute set on the document root for the styling layer.
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn toggle_label(self) -> String {
        format!("Switch to {} theme", self.toggle())
    }

    /// Initial mode: persisted choice, then system preference, then light.
    pub fn resolve(persisted: Option<ThemeMode>, system: Option<ThemeMode>) -> Self {
        persisted.or(system).unwrap_or_default()
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct ParseThemeError(String);

impl FromStr for ThemeMode {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage rejected the write: {0}")]
    Write(String),
    #[error("storage read failed: {0}")]
    Read(String),
}

/// Persistent key-value slot holding the user's theme choice.
pub trait ThemeStorage {
    fn load(&self) -> Result<Option<String>, StorageError>;
    fn save(&mut self, value: &str) -> Result<(), StorageError>;
}

/// Whatever the styling layer reads the active theme from.
pub trait ThemeSurface {
    fn apply(&mut self, mode: ThemeMode);
}

/// Single writer of the active theme.
///
/// Storage failures are logged and switch the controller to in-memory
/// operation for the rest of its life; callers never see them.
pub struct ThemeController<S, D> {
    mode: ThemeMode,
    storage: S,
    surface: D,
    persistent: bool,
}

impl<S: ThemeStorage, D: ThemeSurface> ThemeController<S, D> {
    pub fn new(storage: S, mut surface: D, system: Option<ThemeMode>) -> Self {
        let (persisted, persistent) = match storage.load() {
            Ok(value) => (
                value.and_then(|v| match v.parse::<ThemeMode>() {
                    Ok(mode) => Some(mode),
                    Err(e) => {
                        log::warn!("ignoring persisted theme: {e}");
                        None
                    }
                }),
                true,
            ),
            Err(e) => {
                log::warn!("theme will not persist this session: {e}");
                (None, false)
            }
        };
        let mode = ThemeMode::resolve(persisted, system);
        log::debug!("initial theme {mode}");
        surface.apply(mode);
        Self {
            mode,
            storage,
            surface,
            persistent,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    pub fn toggle(&mut self) -> ThemeMode {
        self.set(self.mode.toggle())
    }

    fn set(&mut self, mode: ThemeMode) -> ThemeMode {
        self.mode = mode;
        if self.persistent {
            if let Err(e) = self.storage.save(mode.as_str()) {
                log::warn!("theme will not persist this session: {e}");
                self.persistent = false;
            }
        }
        self.surface.apply(mode);
        mode
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::HashMap, rc::Rc};

    use super::*;

    // shared so a second controller can "reload" from the same store
    #[derive(Clone, Default)]
    struct MemoryStorage(Rc<RefCell<HashMap<String, String>>>);

    impl ThemeStorage for MemoryStorage {
        fn load(&self) -> Result<Option<String>, StorageError> {
            Ok(self.0.borrow().get(THEME_STORAGE_KEY).cloned())
        }

        fn save(&mut self, value: &str) -> Result<(), StorageError> {
            self.0
                .borrow_mut()
                .insert(THEME_STORAGE_KEY.to_string(), value.to_string());
            Ok(())
        }
    }

    struct BrokenStorage {
        fail_reads: bool,
        writes: usize,
    }

    impl ThemeStorage for BrokenStorage {
        fn load(&self) -> Result<Option<String>, StorageError> {
            if self.fail_reads {
                Err(StorageError::Unavailable)
            } else {
                Ok(None)
            }
        }

        fn save(&mut self, _value: &str) -> Result<(), StorageError> {
            self.writes += 1;
            Err(StorageError::Write("quota exceeded".to_string()))
        }
    }

    #[derive(Default)]
    struct Attributes(HashMap<&'static str, String>);

    impl ThemeSurface for Attributes {
        fn apply(&mut self, mode: ThemeMode) {
            self.0.insert(THEME_ATTRIBUTE, mode.to_string());
        }
    }

    impl Attributes {
        fn theme(&self) -> Option<&str> {
            self.0.get(THEME_ATTRIBUTE).map(String::as_str)
        }
    }

    #[test]
    fn test_toggle_is_involution() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(mode.toggle().toggle(), mode);
            assert_ne!(mode.toggle(), mode);
        }
    }

    #[test]
    fn test_parse_round_trip() {
        assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!(" light\n".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert!("sepia".parse::<ThemeMode>().is_err());
        assert_eq!(ThemeMode::Dark.to_string(), "dark");
        assert_eq!(ThemeMode::Light.toggle_label(), "Switch to dark theme");
    }

    #[test]
    fn test_resolution_order() {
        use ThemeMode::*;
        assert_eq!(ThemeMode::resolve(Some(Light), Some(Dark)), Light);
        assert_eq!(ThemeMode::resolve(None, Some(Dark)), Dark);
        assert_eq!(ThemeMode::resolve(None, None), Light);
    }

    #[test]
    fn test_toggle_persists_and_survives_reload() {
        let storage = MemoryStorage::default();
        let mut controller =
            ThemeController::new(storage.clone(), Attributes::default(), Some(ThemeMode::Light));
        assert_eq!(controller.mode(), ThemeMode::Light);
        assert_eq!(controller.surface().theme(), Some("light"));

        assert_eq!(controller.toggle(), ThemeMode::Dark);
        assert_eq!(storage.load().unwrap().as_deref(), Some("dark"));
        assert_eq!(controller.surface().theme(), Some("dark"));

        // reload: the persisted choice beats the light system preference
        let reloaded = ThemeController::new(storage, Attributes::default(), Some(ThemeMode::Light));
        assert_eq!(reloaded.mode(), ThemeMode::Dark);
        assert_eq!(reloaded.surface().theme(), Some("dark"));
    }

    #[test]
    fn test_double_toggle_restores_mode() {
        let storage = MemoryStorage::default();
        let mut controller = ThemeController::new(storage.clone(), Attributes::default(), None);
        controller.toggle();
        controller.toggle();
        assert_eq!(controller.mode(), ThemeMode::Light);
        assert_eq!(storage.load().unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_garbage_in_storage_falls_back_to_system() {
        let storage = MemoryStorage::default();
        storage
            .0
            .borrow_mut()
            .insert(THEME_STORAGE_KEY.to_string(), "purple".to_string());
        let controller = ThemeController::new(storage, Attributes::default(), Some(ThemeMode::Dark));
        assert_eq!(controller.mode(), ThemeMode::Dark);
        assert!(controller.is_persistent());
    }

    #[test]
    fn test_unavailable_storage_degrades_to_memory() {
        let storage = BrokenStorage {
            fail_reads: true,
            writes: 0,
        };
        let mut controller = ThemeController::new(storage, Attributes::default(), None);
        assert!(!controller.is_persistent());
        assert_eq!(controller.toggle(), ThemeMode::Dark);
        assert_eq!(controller.surface().theme(), Some("dark"));
        assert_eq!(controller.storage.writes, 0);
    }

    #[test]
    fn test_failed_write_stops_further_writes() {
        let storage = BrokenStorage {
            fail_reads: false,
            writes: 0,
        };
        let mut controller = ThemeController::new(storage, Attributes::default(), None);
        assert!(controller.is_persistent());
        assert_eq!(controller.toggle(), ThemeMode::Dark);
        assert!(!controller.is_persistent());
        assert_eq!(controller.toggle(), ThemeMode::Light);
        assert_eq!(controller.storage.writes, 1);
        assert_eq!(controller.surface().theme(), Some("light"));
    }
}
