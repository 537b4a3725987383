//! Background calculation worker.
//!
//! Runs one `compute` call on its own thread and delivers exactly one
//! message over a channel, so a frontend can stay responsive meanwhile.

use cb_engine::{
    CombustionEngine, CombustionResult, EngineConfig, EngineError, ProcessConditions,
};
use cb_fuels::Mixture;
use std::sync::mpsc::{Receiver, TryRecvError, channel};
use std::thread::{self, JoinHandle};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone)]
pub enum WorkerMessage {
    Complete { result: Box<CombustionResult> },
    Error { error: EngineError },
}

pub struct CalcWorker {
    pub result_rx: Receiver<WorkerMessage>,
    _handle: JoinHandle<()>,
}

impl CalcWorker {
    pub fn start(mixture: Mixture, conditions: ProcessConditions, config: EngineConfig) -> Self {
        let (tx, rx) = channel();

        let handle = thread::spawn(move || {
            let message = match CombustionEngine::new(config).compute(&mixture, &conditions) {
                Ok(result) => WorkerMessage::Complete {
                    result: Box::new(result),
                },
                Err(error) => WorkerMessage::Error { error },
            };
            // The receiver may have been dropped; nobody is left to tell.
            let _ = tx.send(message);
        });

        Self {
            result_rx: rx,
            _handle: handle,
        }
    }

    /// Non-blocking poll; `None` while the calculation is still running.
    pub fn try_message(&self) -> AppResult<Option<WorkerMessage>> {
        match self.result_rx.try_recv() {
            Ok(message) => Ok(Some(message)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(AppError::Worker(
                "calculation thread exited without a result".to_string(),
            )),
        }
    }

    /// Block until the calculation finishes.
    pub fn wait(self) -> AppResult<CombustionResult> {
        match self.result_rx.recv() {
            Ok(WorkerMessage::Complete { result }) => Ok(*result),
            Ok(WorkerMessage::Error { error }) => Err(AppError::Engine(error)),
            Err(_) => Err(AppError::Worker(
                "calculation thread exited without a result".to_string(),
            )),
        }
    }
}
