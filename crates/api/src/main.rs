/// The demo serves on a fixed port; nothing is read from the environment
/// besides `RUST_LOG` (verbosity only).
const BIND_ADDR: &str = "0.0.0.0:8080";

#[tokio::main]
async fn main() {
    todoapi_observability::init();

    let app = todoapi_api::app::build_app();
    todoapi_api::app::routes::log_route_table();

    let listener = match tokio::net::TcpListener::bind(BIND_ADDR).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, address = BIND_ADDR, "failed to bind listener");
            std::process::exit(1);
        }
    };

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
