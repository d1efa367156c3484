// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! vidmark - browse and prune video annotation events from the terminal

use std::process::ExitCode;

use vidmark_cli::run;

#[tokio::main]
async fn main() -> ExitCode {
    run().await
}
