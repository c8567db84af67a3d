#![allow(non_snake_case)]

#[cfg(feature = "ssr")]
mod config {
    use serde::Deserialize;

    #[derive(Deserialize, Clone, Debug, Default)]
    #[serde(default)]
    pub struct Config {
        pub server: ServerConfig,
        pub backend: BackendConfig,
        pub auth: AuthConfig,
    }

    #[derive(Deserialize, Clone, Debug)]
    #[serde(default)]
    pub struct ServerConfig {
        pub bind: String,
        pub port: u16,
    }

    #[derive(Deserialize, Clone, Debug)]
    #[serde(default)]
    pub struct BackendConfig {
        pub base_url: String,
        pub timeout_secs: u64,
    }

    #[derive(Deserialize, Clone, Debug)]
    #[serde(default)]
    pub struct AuthConfig {
        pub url: String,
        pub publishable_key: String,
    }

    impl Default for ServerConfig {
        fn default() -> Self {
            Self {
                bind: "0.0.0.0".into(),
                port: 3000,
            }
        }
    }

    impl Default for BackendConfig {
        fn default() -> Self {
            Self {
                base_url: "http://localhost:8000".into(),
                timeout_secs: 15,
            }
        }
    }

    impl Default for AuthConfig {
        fn default() -> Self {
            Self {
                url: "http://localhost:54321".into(),
                publishable_key: String::new(),
            }
        }
    }

    impl ServerConfig {
        pub fn addr(&self) -> String {
            format!("{}:{}", self.bind, self.port)
        }
    }

    pub fn load(path: &str) -> Config {
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("failed to parse config {path}: {e}, using defaults");
                    Config::default()
                }
            },
            Err(e) => {
                tracing::warn!("failed to read config {path}: {e}, using defaults");
                Config::default()
            }
        }
    }

}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use std::time::Duration;

    use axum::Router;
    use career_api::middleware::auth::AppState;
    use career_services::{AuthProvider, Backend};
    use career_ui::{shell, App};
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::{fmt, EnvFilter};

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let configPath = if let Some(idx) = args.iter().position(|a| a == "--config") {
        args.get(idx + 1)
            .cloned()
            .unwrap_or_else(|| "config.example.toml".into())
    } else {
        "config.example.toml".into()
    };

    let appConfig = config::load(&configPath);
    tracing::info!(
        "loaded config from {configPath}: bind={} backend={}",
        appConfig.server.addr(),
        appConfig.backend.base_url
    );

    let timeout = Duration::from_secs(appConfig.backend.timeout_secs);
    let backend = Backend::new(&appConfig.backend.base_url, timeout)
        .unwrap_or_else(|e| panic!("invalid backend configuration: {e}"));
    let authProvider = AuthProvider::new(
        &appConfig.auth.url,
        &appConfig.auth.publishable_key,
        timeout,
    )
    .unwrap_or_else(|e| panic!("invalid auth configuration: {e}"));

    let appState = AppState {
        auth_provider: authProvider.clone(),
    };

    let conf = get_configuration(None).expect("failed to load Leptos configuration");
    let mut leptosOptions = conf.leptos_options;
    if let Ok(addr) = appConfig.server.addr().parse() {
        leptosOptions.site_addr = addr;
    } else {
        tracing::warn!(
            "ignoring unparseable bind address {}, using {}",
            appConfig.server.addr(),
            leptosOptions.site_addr
        );
    }
    let addr = leptosOptions.site_addr;

    let routes = generate_route_list(App);

    let apiRouter = career_api::api_router(appState);

    let app = Router::new()
        .leptos_routes_with_context(
            &leptosOptions,
            routes,
            {
                let backend = backend.clone();
                let authProvider = authProvider.clone();
                move || {
                    provide_context(backend.clone());
                    provide_context(authProvider.clone());
                }
            },
            {
                let leptosOptions = leptosOptions.clone();
                move || shell(leptosOptions.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptosOptions)
        .merge(apiRouter)
        .layer(axum::middleware::from_fn(
            career_api::middleware::auth::require_page_auth,
        ))
        .layer(TraceLayer::new_for_http());

    tracing::info!("listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server exited with error");
}

#[cfg(not(feature = "ssr"))]
fn main() {}
