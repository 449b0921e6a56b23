use std::sync::Arc;

use clap::Parser;
use tokio::io::{AsyncWriteExt, BufWriter, Stdout};
use tracing::info;

use txdispatch::prelude::*;

#[tokio::main]
async fn main() {
    let config = Config::parse();

    if let Err(e) = init_logging(config.verbose) {
        eprintln!("Error: {}", AppError::from(e));
        std::process::exit(1);
    }

    CliApp::new("txdispatch")
        .run(|writer| run_dispatch(writer, config))
        .await
}

/// Main application logic - dispatches the CSV batch and reports invocations
async fn run_dispatch(mut writer: BufWriter<Stdout>, config: Config) -> Result<(), AppError> {
    let source = CsvTransactionSource::new(&config.input);

    match config.operations {
        OperationsMode::Record => {
            // Keep a handle on the recorder; the dispatcher moves to a worker thread
            let recorder = Arc::new(RecordingOperations::new());
            run_blocking(Dispatcher::new(source, Arc::clone(&recorder))).await?;

            let invocations = recorder.invocations();
            let mut report = Vec::new();
            write_invocations(&invocations, &mut report)?;
            writer.write_all(&report).await?;
            writer.flush().await?;

            info!(dispatched = invocations.len(), "Batch dispatched");
        }
        OperationsMode::Unimplemented => {
            run_blocking(Dispatcher::new(source, UnimplementedOperations)).await?;
        }
    }

    Ok(())
}

/// Run the synchronous dispatcher off the async runtime
async fn run_blocking<S, P>(dispatcher: Dispatcher<S, P>) -> Result<(), AppError>
where
    S: TransactionSource + 'static,
    P: PaymentOperations + 'static,
{
    tokio::task::spawn_blocking(move || dispatcher.process()).await??;
    Ok(())
}
