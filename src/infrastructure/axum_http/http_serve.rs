use std::{net::SocketAddr, sync::Arc, time::Duration};

use anyhow::Result;
use axum::{
    Router,
    http::{
        Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    routing::get,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

use crate::{
    config::config_model::DotEnvyConfig,
    infrastructure::{
        axum_http::{default_routers, routers},
        payments::backend_client::PaymentBackendClient,
    },
};

pub fn build_router(config: &DotEnvyConfig, backend: Arc<PaymentBackendClient>) -> Result<Router> {
    let pricing = routers::pricing::routes()
        .merge(routers::checkout::routes(Arc::clone(&backend)))
        .merge(routers::downloads::routes(Arc::clone(&backend), &config.zip_poll));

    let app = Router::new()
        .fallback(default_routers::not_found)
        .nest("/api/v1/pricing", pricing)
        .route("/api/v1/health-check", get(default_routers::health_check))
        .layer(TimeoutLayer::new(Duration::from_secs(config.server.timeout)))
        .layer(RequestBodyLimitLayer::new(
            (config.server.body_limit * 1024 * 1024).try_into()?,
        ))
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([AUTHORIZATION, CONTENT_TYPE])
                .allow_origin(Any),
        )
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

pub async fn start(config: Arc<DotEnvyConfig>, backend: Arc<PaymentBackendClient>) -> Result<()> {
    let app = build_router(&config, backend)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = TcpListener::bind(addr).await?;

    info!("Server is running on port {}", config.server.port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to install CTRL+C signal handler");
            std::future::pending::<()>().await;
        }
    };

    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received ctrl+C signal"),
        _ = terminate => info!("Received terminate signal"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::config_model::{Backend, Server, Throttle, ZipPoll},
        infrastructure::throttle::RequestThrottle,
    };
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn config() -> DotEnvyConfig {
        DotEnvyConfig {
            server: Server {
                port: 0,
                body_limit: 1,
                timeout: 5,
            },
            backend: Backend {
                url: "http://127.0.0.1:9".to_string(),
                api_token: None,
            },
            throttle: Throttle {
                capacity: 1,
                refill_per_sec: 1.0,
            },
            zip_poll: ZipPoll {
                interval_ms: 1,
                max_attempts: 1,
            },
        }
    }

    fn app() -> Router {
        let config = config();
        let throttle = Arc::new(RequestThrottle::new(1, 1.0).unwrap());
        let backend = Arc::new(PaymentBackendClient::new(&config.backend.url, None, throttle));
        build_router(&config, backend).unwrap()
    }

    #[tokio::test]
    async fn serves_health_check_and_nested_pricing_routes() {
        let health = app()
            .oneshot(Request::builder().uri("/api/v1/health-check").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(health.status(), StatusCode::OK);

        let plans = app()
            .oneshot(Request::builder().uri("/api/v1/pricing/plans/3GB-3m").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(plans.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_route_falls_back_to_not_found() {
        let response = app()
            .oneshot(Request::builder().uri("/api/v2/anything").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
