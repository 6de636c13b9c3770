//! Integration tests per il ciclo di vita del server
//!
//! Bind, drain entro la deadline, abbandono delle connessioni lente e
//! chiusura del pool prima dello shutdown del listener.

mod common;

#[cfg(test)]
mod lifecycle_tests {
    use super::common::*;
    use axum::Router;
    use axum::routing::get;
    use review_server::core::config::parse_duration;
    use review_server::routes::AppRouter;
    use review_server::{LifecycleState, RouteComposer, Server, ServerError, ShutdownOutcome};
    use sqlx::MySqlPool;
    use std::net::SocketAddr;
    use std::time::{Duration, Instant};
    use tokio::net::TcpStream;
    use tokio::sync::{mpsc, oneshot};

    fn localhost() -> SocketAddr {
        "127.0.0.1:0".parse().unwrap()
    }

    /// Router con un endpoint `/test/slow` che notifica l'ingresso nell'handler
    /// e poi dorme per `delay`
    fn slow_router(pool: MySqlPool, delay: Duration) -> (Router, mpsc::UnboundedReceiver<()>) {
        let (entered_tx, entered_rx) = mpsc::unbounded_channel::<()>();

        let group = move |router: AppRouter| {
            let entered_tx = entered_tx.clone();
            router.route(
                "/slow",
                get(move || {
                    let entered_tx = entered_tx.clone();
                    async move {
                        let _ = entered_tx.send(());
                        tokio::time::sleep(delay).await;
                        "done"
                    }
                }),
            )
        };

        let router = RouteComposer::new()
            .mount("/test", group)
            .unwrap()
            .build(create_test_state(pool));
        (router, entered_rx)
    }

    #[tokio::test]
    async fn test_bind_on_occupied_port_fails() {
        let occupied = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let address = occupied.local_addr().unwrap();
        let router = review_server::create_router(create_test_state(lazy_pool())).unwrap();

        let result = Server::bind(address, router, lazy_pool(), Duration::from_secs(1)).await;

        match result {
            Err(ServerError::Bind { address: failed, .. }) => assert_eq!(failed, address),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("bind on an occupied port should fail"),
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_shutdown_drains_and_stops() {
        let state = create_test_state(lazy_pool());
        let pool = state.pool.clone();
        let router = review_server::create_router(state.clone()).unwrap();
        let server = Server::bind(localhost(), router, pool.clone(), Duration::from_secs(5))
            .await
            .unwrap();
        let address = server.local_addr();
        let lifecycle = server.lifecycle();
        assert_eq!(*lifecycle.borrow(), LifecycleState::Initializing);

        let (stop_tx, stop_rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(server.run_until(async move {
            let _ = stop_rx.await;
        }));

        let mut running = lifecycle.clone();
        running
            .wait_for(|state| *state == LifecycleState::Running)
            .await
            .unwrap();

        let response = raw_get(address, "/health").await.unwrap();
        assert!(response.starts_with("HTTP/1.1 200"), "got: {response}");
        assert!(response.contains("Server is healthy"));

        stop_tx.send(()).unwrap();
        let outcome = handle.await.unwrap();

        assert_eq!(outcome, ShutdownOutcome::Drained);
        assert_eq!(*lifecycle.borrow(), LifecycleState::Stopped);
        assert!(pool.is_closed());
        assert!(state.pool.is_closed());
        assert!(TcpStream::connect(address).await.is_err());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_pool_is_closed_before_listener_shutdown() {
        let pool = lazy_pool();
        let router = review_server::create_router(create_test_state(pool.clone())).unwrap();
        let server = Server::bind(localhost(), router, pool.clone(), Duration::from_secs(5))
            .await
            .unwrap();

        let token = server.shutdown_token();
        let observed_pool = pool.clone();
        let observer = tokio::spawn(async move {
            token.cancelled().await;
            observed_pool.is_closed()
        });

        let (stop_tx, stop_rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(server.run_until(async move {
            let _ = stop_rx.await;
        }));

        stop_tx.send(()).unwrap();
        handle.await.unwrap();

        assert!(observer.await.unwrap(), "pool must be closed when the listener stops");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_in_flight_request_completes_within_deadline() {
        let pool = lazy_pool();
        let (router, mut entered) = slow_router(pool.clone(), Duration::from_millis(300));
        let server = Server::bind(localhost(), router, pool, Duration::from_secs(5))
            .await
            .unwrap();
        let address = server.local_addr();

        let (stop_tx, stop_rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(server.run_until(async move {
            let _ = stop_rx.await;
        }));

        let client = tokio::spawn(async move { raw_get(address, "/test/slow").await });
        entered.recv().await.unwrap();

        stop_tx.send(()).unwrap();

        let response = client.await.unwrap().unwrap();
        assert!(response.starts_with("HTTP/1.1 200"), "got: {response}");
        assert!(response.contains("done"));
        assert_eq!(handle.await.unwrap(), ShutdownOutcome::Drained);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_slow_requests_are_abandoned_after_deadline() {
        const CLIENTS: usize = 4;

        let pool = lazy_pool();
        let (router, mut entered) = slow_router(pool.clone(), Duration::from_secs(30));
        let graceful_timeout = Duration::from_millis(200);
        let server = Server::bind(localhost(), router, pool, graceful_timeout)
            .await
            .unwrap();
        let address = server.local_addr();

        let (stop_tx, stop_rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(server.run_until(async move {
            let _ = stop_rx.await;
        }));

        // latenza complessiva (4 x 30s) molto oltre la deadline
        let clients: Vec<_> = (0..CLIENTS)
            .map(|_| tokio::spawn(async move { raw_get(address, "/test/slow").await }))
            .collect();
        for _ in 0..CLIENTS {
            entered.recv().await.unwrap();
        }

        let started = Instant::now();
        stop_tx.send(()).unwrap();
        let outcome = handle.await.unwrap();

        assert_eq!(outcome, ShutdownOutcome::TimedOut);
        assert!(started.elapsed() >= graceful_timeout);
        assert!(started.elapsed() < Duration::from_secs(5));
        for client in &clients {
            assert!(!client.is_finished());
        }
        for client in clients {
            client.abort();
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_unbounded_graceful_timeout_still_stops() {
        let pool = lazy_pool();
        let router = review_server::create_router(create_test_state(pool.clone())).unwrap();
        // accettato dal parser ma non rappresentabile come Instant
        let graceful_timeout = parse_duration("18446744073709551615").unwrap();
        let server = Server::bind(localhost(), router, pool.clone(), graceful_timeout)
            .await
            .unwrap();
        let lifecycle = server.lifecycle();

        let outcome = server.run_until(async {}).await;

        assert_eq!(outcome, ShutdownOutcome::Drained);
        assert_eq!(*lifecycle.borrow(), LifecycleState::Stopped);
        assert!(pool.is_closed());
    }

    #[tokio::test]
    async fn test_lifecycle_starts_initializing() {
        let router = review_server::create_router(create_test_state(lazy_pool())).unwrap();
        let server = Server::bind(localhost(), router, lazy_pool(), Duration::from_secs(1))
            .await
            .unwrap();

        assert_eq!(*server.lifecycle().borrow(), LifecycleState::Initializing);
        assert_ne!(server.local_addr().port(), 0);
    }
}
