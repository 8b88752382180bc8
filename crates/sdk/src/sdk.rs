//! The SDK handle and its operations.
//!
//! A [`KycSdk`] owns one widget instantiation: its config store, event
//! bus, mount state, and background tasks. Handles are cheap to clone;
//! all clones share the same instance.

use std::sync::{Arc, RwLock};

use tokio::sync::RwLock as TokioRwLock;
use uuid::Uuid;

use kyc_sdk_core::config::{
    ConfigSnapshot, ConfigStore, CustomCssResponse, DebugChangeResponse, InitResponse,
    LanguageChangeResponse, LanguageTag, StyleChangeResponse, StyleOverrides, Theme,
    ThemeChangeResponse, UserData, UserDataResponse,
};
use kyc_sdk_core::embed::EmbeddedContext;
use kyc_sdk_core::events::WidgetEvent;
use kyc_sdk_core::host::{detect_host_theme, HostEnvironment};
use kyc_sdk_core::lifecycle::{MountRegistry, MountTarget};
use kyc_sdk_core::storage::{keys, CredentialStore};
use kyc_sdk_core::style::{
    fallback_css, overrides_css, CUSTOM_CSS_STYLESHEET_ID, FALLBACK_STYLESHEET_ID,
    OVERRIDES_STYLESHEET_ID,
};
use kyc_sdk_core::translation::{TranslationProvider, TranslationSettings};

use crate::bridge::{self, BridgeHandle};
use crate::bus::EventBus;
use crate::options::SdkOptions;
use crate::translation::TranslationFetcher;
use crate::watcher::{self, WatcherHandle};
use crate::Result;

/// Element id of the full-viewport frame created when no container
/// selector is supplied.
pub const DEFAULT_FRAME_ID: &str = "widget-iframe";

/// An embeddable KYC widget instance.
#[derive(Clone)]
pub struct KycSdk {
    inner: Arc<SdkInner>,
}

pub(crate) struct SdkInner {
    instance_id: Uuid,
    api_key: String,
    tenant_id: String,
    auto_sync_theme: bool,
    host: Arc<dyn HostEnvironment>,
    credentials: Arc<dyn CredentialStore>,
    registry: Arc<MountRegistry>,
    store: RwLock<ConfigStore>,
    bus: EventBus,
    translations: TranslationFetcher,
    mount: TokioRwLock<Option<MountState>>,
}

struct MountState {
    target: MountTarget,
    context: Arc<dyn EmbeddedContext>,
    bridge: BridgeHandle,
    watcher: Option<WatcherHandle>,
}

impl KycSdk {
    /// Constructs a widget instance.
    ///
    /// Options are validated here, not deferred to first use. When no
    /// theme option is given, the initial theme is detected from the
    /// host environment; when no language option is given, the
    /// translation default language applies.
    pub fn new(
        options: SdkOptions,
        host: Arc<dyn HostEnvironment>,
        credentials: Arc<dyn CredentialStore>,
        registry: Arc<MountRegistry>,
    ) -> Result<Self> {
        Self::build(options, host, credentials, registry, None)
    }

    /// Like [`KycSdk::new`], but with an explicit translation provider
    /// instead of one derived from the translation endpoint setting.
    pub fn with_translation_provider(
        options: SdkOptions,
        host: Arc<dyn HostEnvironment>,
        credentials: Arc<dyn CredentialStore>,
        registry: Arc<MountRegistry>,
        provider: Arc<dyn TranslationProvider>,
    ) -> Result<Self> {
        Self::build(options, host, credentials, registry, Some(provider))
    }

    fn build(
        options: SdkOptions,
        host: Arc<dyn HostEnvironment>,
        credentials: Arc<dyn CredentialStore>,
        registry: Arc<MountRegistry>,
        provider: Option<Arc<dyn TranslationProvider>>,
    ) -> Result<Self> {
        options.validate()?;

        let settings = options
            .translation
            .clone()
            .unwrap_or_else(TranslationSettings::new);
        let theme = options
            .theme
            .unwrap_or_else(|| detect_host_theme(host.as_ref()));
        let language = options
            .language
            .clone()
            .unwrap_or_else(|| settings.default_language.clone());

        let mut store = ConfigStore::new(theme, language, options.debug);
        if let Some(styles) = &options.styles {
            store.merge_styles(styles);
        }
        if let Some(css) = &options.custom_css {
            store.set_custom_css(css.clone());
        }

        let translations = match provider {
            Some(provider) => TranslationFetcher::with_provider(settings, provider),
            None => TranslationFetcher::new(settings),
        };
        let inner = SdkInner {
            instance_id: Uuid::new_v4(),
            api_key: options.api_key.clone(),
            tenant_id: options.tenant_id.clone(),
            auto_sync_theme: options.auto_sync_enabled(),
            host,
            credentials,
            registry,
            store: RwLock::new(store),
            bus: EventBus::new(),
            translations,
            mount: TokioRwLock::new(None),
        };
        tracing::debug!(instance = %inner.instance_id, theme = %theme, "KYC SDK constructed");

        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    /// Mounts the widget.
    ///
    /// Renders inline when `container_selector` resolves to a
    /// registered element; errors when a selector was supplied but does
    /// not resolve; creates (or reuses) a full-viewport frame
    /// otherwise. Calling init while already mounted logs a warning and
    /// is a no-op.
    pub async fn init(&self, container_selector: Option<&str>) -> Result<InitResponse> {
        let inner = &self.inner;
        let target = match container_selector {
            Some(selector) => MountTarget::inline(selector),
            None => MountTarget::frame(DEFAULT_FRAME_ID),
        };

        if inner.mount.read().await.is_some() {
            tracing::warn!(
                instance = %inner.instance_id,
                "widget already initialized, skipping duplicate initialization"
            );
            return Ok(InitResponse { ok: true });
        }
        if !inner.registry.acquire(&target) {
            tracing::warn!(
                target = %target,
                "a widget is already mounted on this target, skipping duplicate initialization"
            );
            return Ok(InitResponse { ok: true });
        }

        // Write-once credential cache: never overwritten on later inits.
        inner.credentials.set_if_absent(keys::API_KEY, &inner.api_key);
        inner
            .credentials
            .set_if_absent(keys::TENANT_ID, &inner.tenant_id);

        let mounted = match &target {
            MountTarget::Inline(selector) => inner.host.mount_inline(selector),
            MountTarget::Frame(frame_id) => inner.host.mount_frame(frame_id),
        };
        let context = match mounted {
            Ok(context) => context,
            Err(err) => {
                inner.registry.release(&target);
                return Err(err.into());
            }
        };

        inner.seed_context(context.as_ref());

        let bridge = bridge::attach(&inner.bus, Arc::clone(&context));
        let watcher = inner
            .auto_sync_theme
            .then(|| watcher::spawn(Arc::clone(&inner.host), Arc::clone(inner)));

        *inner.mount.write().await = Some(MountState {
            target,
            context,
            bridge,
            watcher,
        });
        tracing::info!(instance = %inner.instance_id, "widget initialized");
        Ok(InitResponse { ok: true })
    }

    /// Tears the widget down: stops the watcher and bridge, detaches
    /// the embedded context, and releases the mount registration.
    /// After destroy, a fresh `init` fully recreates state.
    pub async fn destroy(&self) {
        let Some(state) = self.inner.mount.write().await.take() else {
            tracing::debug!("destroy called without an active mount");
            return;
        };

        if let Some(watcher) = &state.watcher {
            watcher.stop();
        }
        state.bridge.detach();
        state.context.detach();
        self.inner.registry.release(&state.target);
        tracing::info!(instance = %self.inner.instance_id, "widget destroyed");
    }

    /// Switches the theme. Emits nothing when the theme is already in
    /// effect.
    pub async fn change_theme(&self, theme: Theme) -> Result<ThemeChangeResponse> {
        Ok(self.inner.apply_theme(theme).await)
    }

    /// Switches the language, loading its dictionary through the
    /// translation fallback chain. Emits nothing when the language is
    /// already in effect.
    pub async fn change_language(&self, lang: LanguageTag) -> Result<LanguageChangeResponse> {
        Ok(self.inner.apply_language(lang).await)
    }

    /// Shallow-merges style overrides over the current set. Always
    /// emits: a partial merge can change the rendered CSS even when
    /// called with previously seen keys.
    pub async fn change_styles(&self, styles: StyleOverrides) -> Result<StyleChangeResponse> {
        let merged = {
            let mut store = self.inner.store.write().expect("Lock poisoned");
            store.merge_styles(&styles)
        };
        self.inner.bus.emit(WidgetEvent::StyleChange {
            styles: merged.clone(),
        });
        Ok(StyleChangeResponse {
            success: true,
            styles: merged,
        })
    }

    /// Replaces the raw custom stylesheet wholesale.
    pub async fn change_custom_css(&self, css: impl Into<String>) -> Result<CustomCssResponse> {
        let css = css.into();
        {
            let mut store = self.inner.store.write().expect("Lock poisoned");
            store.set_custom_css(css.clone());
        }
        self.inner
            .bus
            .emit(WidgetEvent::CustomCssChange { css: css.clone() });
        Ok(CustomCssResponse { success: true, css })
    }

    /// Toggles debug mode and forwards the change to the embedded
    /// context.
    pub async fn set_debug(&self, enabled: bool) -> Result<DebugChangeResponse> {
        {
            let mut store = self.inner.store.write().expect("Lock poisoned");
            store.set_debug(enabled);
        }
        self.inner
            .bus
            .emit(WidgetEvent::DebugChange { debug: enabled });
        Ok(DebugChangeResponse {
            success: true,
            debug: enabled,
        })
    }

    /// Forwards applicant data to the embedded context as-is.
    pub async fn send_user_data(&self, user_data: UserData) -> Result<UserDataResponse> {
        self.inner.bus.emit(WidgetEvent::UserData {
            user_data: user_data.clone(),
        });
        Ok(UserDataResponse {
            success: true,
            user_data,
        })
    }

    /// Snapshot of the current configuration.
    pub async fn config(&self) -> ConfigSnapshot {
        self.inner.store.read().expect("Lock poisoned").snapshot()
    }

    /// Resolves a dot-separated key against the loaded dictionary,
    /// interpolating `{placeholder}` parameters. Missing keys fall back
    /// to the key itself.
    pub fn translate(&self, key: &str, params: &[(&str, &str)]) -> String {
        self.inner
            .store
            .read()
            .expect("Lock poisoned")
            .dictionary()
            .translate(key, params)
    }

    /// Subscribes to the host-side event bus. Useful for host pages
    /// that mirror widget state elsewhere.
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<WidgetEvent> {
        self.inner.bus.subscribe()
    }
}

impl SdkInner {
    fn seed_context(&self, context: &dyn EmbeddedContext) {
        let (theme, styles, custom_css) = {
            let store = self.store.read().expect("Lock poisoned");
            (
                store.theme(),
                store.style_overrides().clone(),
                store.custom_css().map(str::to_string),
            )
        };

        context.inject_stylesheet(FALLBACK_STYLESHEET_ID, &fallback_css(theme));
        context.set_dark(theme.is_dark());
        if !styles.is_empty() {
            context.inject_stylesheet(OVERRIDES_STYLESHEET_ID, &overrides_css(&styles));
        }
        if let Some(css) = custom_css {
            context.inject_stylesheet(CUSTOM_CSS_STYLESHEET_ID, &css);
        }
    }

    pub(crate) async fn apply_theme(&self, theme: Theme) -> ThemeChangeResponse {
        {
            let mut store = self.store.write().expect("Lock poisoned");
            if store.theme() == theme {
                // Unchanged: skip the event to avoid redundant
                // re-renders in the embedded context.
                return ThemeChangeResponse {
                    success: true,
                    theme,
                };
            }
            store.set_theme(theme);
        }
        self.bus.emit(WidgetEvent::ThemeChange { theme });
        ThemeChangeResponse {
            success: true,
            theme,
        }
    }

    pub(crate) async fn apply_language(&self, lang: LanguageTag) -> LanguageChangeResponse {
        let dir = lang.direction();
        {
            let store = self.store.read().expect("Lock poisoned");
            if store.language() == &lang {
                return LanguageChangeResponse {
                    success: true,
                    lang,
                    dir,
                    error: None,
                };
            }
        }

        let generation = self.translations.begin();
        let outcome = self.translations.load(&lang).await;
        if !self.translations.is_current(generation) {
            // A newer language change finished the race; this result
            // must not overwrite it.
            tracing::debug!(lang = %lang, "discarding superseded translation load");
            return LanguageChangeResponse {
                success: false,
                lang,
                dir,
                error: Some("superseded by a newer language change".to_string()),
            };
        }

        {
            let mut store = self.store.write().expect("Lock poisoned");
            store.set_language(lang.clone(), outcome.dictionary);
        }
        self.bus.emit(WidgetEvent::LanguageChange {
            lang: lang.clone(),
            dir,
        });
        LanguageChangeResponse {
            success: true,
            lang,
            dir,
            error: outcome.error,
        }
    }

    pub(crate) fn supports_language(&self, lang: &LanguageTag) -> bool {
        self.translations.supports(lang)
    }
}
