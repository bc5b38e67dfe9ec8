// SPDX-FileCopyrightText: 2026 Billcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! billcast as an AWS Lambda function.
//!
//! Configuration comes from the function's environment (`BILLCAST_*`,
//! `SLACK_WEBHOOK_URL`) and is loaded once per execution environment.

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    let config = match billcast_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            billcast_config::render_errors(&errors);
            return Err("invalid billcast configuration".into());
        }
    };

    billcast::init_tracing(&config.log.level, false);
    billcast::lambda::serve(config).await
}
