//! Server module - Ciclo di vita del listener HTTP
//!
//! `Initializing -> Running -> Draining -> Stopped`. Il bind avviene in fase di
//! inizializzazione (un errore è fatale); il loop di accept gira su un task
//! separato e il chiamante resta in attesa del segnale di interruzione.
//! Al segnale: chiusura del pool, poi shutdown del listener entro la deadline.

use crate::core::ServerError;
use axum::Router;
use futures::FutureExt;
use sqlx::MySqlPool;
use std::future::Future;
use std::net::SocketAddr;
use std::pin::pin;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio::time::{Instant, timeout_at};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Initializing,
    Running,
    Draining,
    Stopped,
}

/// Esito del drain: solo informativo, il processo termina comunque allo stesso modo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownOutcome {
    /// tutte le connessioni si sono chiuse entro la deadline
    Drained,
    /// deadline scaduta, le connessioni rimaste vengono abbandonate
    TimedOut,
}

pub struct Server {
    listener: TcpListener,
    local_addr: SocketAddr,
    router: Router,
    pool: MySqlPool,
    graceful_timeout: Duration,
    shutdown_token: CancellationToken,
    lifecycle: watch::Sender<LifecycleState>,
}

impl Server {
    /// Effettua il bind del listener. Un indirizzo occupato è un errore fatale.
    #[instrument(skip(router, pool))]
    pub async fn bind(
        address: SocketAddr,
        router: Router,
        pool: MySqlPool,
        graceful_timeout: Duration,
    ) -> Result<Self, ServerError> {
        let (lifecycle, _) = watch::channel(LifecycleState::Initializing);

        let listener = TcpListener::bind(address)
            .await
            .map_err(|source| {
                error!("Failed to bind {}: {}", address, source);
                ServerError::Bind { address, source }
            })?;
        let local_addr = listener.local_addr().map_err(ServerError::Startup)?;
        debug!("Listener bound to {}", local_addr);

        Ok(Self {
            listener,
            local_addr,
            router,
            pool,
            graceful_timeout,
            shutdown_token: CancellationToken::new(),
            lifecycle,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn lifecycle(&self) -> watch::Receiver<LifecycleState> {
        self.lifecycle.subscribe()
    }

    /// Token cancellato nel momento in cui parte lo shutdown del listener
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown_token.clone()
    }

    /// Serve fino a SIGINT (Ctrl+C). Gli altri segnali non vengono intercettati.
    pub async fn run(self) -> ShutdownOutcome {
        self.run_until(interrupt_signal()).await
    }

    /// Serve fino al completamento di `signal`, poi esegue il drain.
    pub async fn run_until<F>(self, signal: F) -> ShutdownOutcome
    where
        F: Future<Output = ()>,
    {
        let Server {
            listener,
            local_addr,
            router,
            pool,
            graceful_timeout,
            shutdown_token,
            lifecycle,
        } = self;

        let serve_token = shutdown_token.clone();
        let mut serve_task = tokio::spawn(async move {
            let result = axum::serve(listener, router)
                .with_graceful_shutdown(async move { serve_token.cancelled().await })
                .await;
            // gli errori del loop di accept restano su questo task
            if let Err(e) = result {
                error!("HTTP server error: {}", e);
            }
        });

        lifecycle.send_replace(LifecycleState::Running);
        info!(address = %local_addr, "Server listening");

        signal.await;

        lifecycle.send_replace(LifecycleState::Draining);
        // una durata non rappresentabile come Instant equivale a nessuna deadline
        let deadline = Instant::now().checked_add(graceful_timeout);
        info!(
            timeout_ms = graceful_timeout.as_millis() as u64,
            "Shutdown signal received, draining"
        );

        // Immediately release DB connections: il pool è marcato chiuso al primo poll,
        // le connessioni ancora in uso vengono chiuse al loro rilascio
        let mut db_close = pin!(pool.close());
        let db_closed = db_close.as_mut().now_or_never().is_some();
        debug!(pool_closed = pool.is_closed(), "Database pool closing");

        shutdown_token.cancel();

        let drain = async {
            if !db_closed {
                db_close.await;
            }
            (&mut serve_task).await
        };

        let drained = match deadline {
            Some(deadline) => timeout_at(deadline, drain).await.ok(),
            None => Some(drain.await),
        };

        let outcome = match drained {
            Some(Ok(())) => ShutdownOutcome::Drained,
            Some(Err(join_error)) => {
                error!("HTTP server task failed: {}", join_error);
                ShutdownOutcome::Drained
            }
            None => {
                warn!("Graceful shutdown deadline elapsed, dropping remaining connections");
                serve_task.abort();
                ShutdownOutcome::TimedOut
            }
        };

        lifecycle.send_replace(LifecycleState::Stopped);
        info!("shutting down");
        outcome
    }
}

// We'll accept graceful shutdowns when quit via SIGINT (Ctrl+C);
// SIGKILL, SIGQUIT or SIGTERM keep their default behaviour.
async fn interrupt_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for SIGINT: {}", e);
        std::future::pending::<()>().await;
    }
}
