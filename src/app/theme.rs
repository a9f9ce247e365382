use leptos::prelude::*;
use leptos_use::use_preferred_dark;

use crate::theme::{
    StorageError, ThemeController, ThemeMode, ThemeStorage, ThemeSurface, THEME_ATTRIBUTE,
    THEME_STORAGE_KEY,
};

const DARK_CLASS: &str = "dark";

/// `localStorage`, looked up on every access so a revoked store is noticed.
struct LocalThemeStorage;

fn local_storage() -> Result<web_sys::Storage, StorageError> {
    window()
        .local_storage()
        .ok()
        .flatten()
        .ok_or(StorageError::Unavailable)
}

impl ThemeStorage for LocalThemeStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(THEME_STORAGE_KEY)
            .map_err(|e| StorageError::Read(format!("{e:?}")))
    }

    fn save(&mut self, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(THEME_STORAGE_KEY, value)
            .map_err(|e| StorageError::Write(format!("{e:?}")))
    }
}

/// The document root: `data-theme` attribute plus the `dark` class.
struct DocumentSurface;

impl ThemeSurface for DocumentSurface {
    fn apply(&mut self, mode: ThemeMode) {
        let Some(root) = document().document_element() else {
            log::warn!("no document element to apply theme to");
            return;
        };
        if let Err(e) = root.set_attribute(THEME_ATTRIBUTE, mode.as_str()) {
            log::warn!("couldn't set {THEME_ATTRIBUTE}: {e:?}");
        }
        if let Err(e) = root.class_list().toggle_with_force(DARK_CLASS, mode.is_dark()) {
            log::warn!("couldn't toggle {DARK_CLASS} class: {e:?}");
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    mode: ReadSignal<ThemeMode>,
    toggle: Callback<()>,
}

impl ThemeContext {
    pub fn mode(&self) -> ThemeMode {
        self.mode.get()
    }

    pub fn toggle(&self) {
        self.toggle.run(());
    }
}

/// Server render always starts light; the controller takes over on the
/// client once storage and the system preference can be read.
pub fn provide_theme() {
    let (mode, set_mode) = signal(ThemeMode::default());
    let controller = StoredValue::new(None::<ThemeController<LocalThemeStorage, DocumentSurface>>);
    let prefers_dark = use_preferred_dark();

    Effect::new(move |_| {
        let system = ThemeMode::from_prefers_dark(prefers_dark.get_untracked());
        let theme = ThemeController::new(LocalThemeStorage, DocumentSurface, Some(system));
        set_mode.set(theme.mode());
        controller.set_value(Some(theme));
    });

    let toggle = Callback::new(move |_| {
        controller.update_value(|theme| match theme {
            Some(theme) => set_mode.set(theme.toggle()),
            None => log::warn!("theme toggled before hydration"),
        });
    });

    provide_context(ThemeContext { mode, toggle });
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    view! {
        <button
            type="button"
            class="w-10 h-10 rounded-full glass flex items-center justify-center text-lg hover:scale-110 transition-transform"
            aria-label=move || theme.mode().toggle_label()
            aria-pressed=move || theme.mode().is_dark().to_string()
            on:click=move |_| theme.toggle()
        >
            {move || if theme.mode().is_dark() { "☀️" } else { "🌙" }}
        </button>
    }
}
