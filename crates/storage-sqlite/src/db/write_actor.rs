//! Single-writer actor for the SQLite database.
//!
//! SQLite allows one writer at a time; funnelling every mutation through a
//! dedicated connection removes lock contention and, more importantly, lets
//! a repository run its read-then-write sequence (sibling-segment scan plus
//! insert, link scan plus cascade delete) inside one immediate transaction.

use std::any::Any;

use diesel::{Connection, SqliteConnection};
use log::error;
use tokio::sync::{mpsc, oneshot};

use super::DbPool;
use crate::errors::StorageError;
use fba_core::errors::Result;

/// A boxed job executed on the writer's dedicated connection.
type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;

type ErasedJob = Job<Box<dyn Any + Send + 'static>>;
type Reply = oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>;

/// Handle for sending jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<(ErasedJob, Reply)>,
}

impl WriteHandle {
    /// Executes a database job on the writer's connection, inside an
    /// immediate transaction. The job's return type is erased over the
    /// channel and downcast on the way back.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static + Any,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |c| job(c).map(|v| Box::new(v) as Box<dyn Any + Send>)),
                ret_tx,
            ))
            .await
            .expect("writer actor channel closed");

        ret_rx
            .await
            .expect("writer actor dropped the reply sender")
            .map(|boxed: Box<dyn Any + Send + 'static>| {
                *boxed
                    .downcast::<T>()
                    .unwrap_or_else(|_| panic!("writer actor result downcast failed"))
            })
    }
}

/// Spawns the background task that owns one pooled connection and processes
/// write jobs serially, each wrapped in an immediate transaction.
pub fn spawn_writer(pool: DbPool) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<(ErasedJob, Reply)>(1024);

    tokio::spawn(async move {
        let mut conn = pool
            .get()
            .expect("failed to get a connection for the writer actor");

        while let Some((job, reply_tx)) = rx.recv().await {
            let result: Result<Box<dyn Any + Send + 'static>> = conn
                .immediate_transaction::<_, StorageError, _>(|c| job(c).map_err(StorageError::from))
                .map_err(|e: StorageError| e.into());

            if reply_tx.send(result).is_err() {
                error!("Writer actor reply receiver dropped before result delivery");
            }
        }
    });

    WriteHandle { tx }
}
