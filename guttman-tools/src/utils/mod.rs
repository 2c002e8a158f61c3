/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */
pub mod cmd_tool_error;
pub use cmd_tool_error::*;

pub type CMDResult<T> = Result<T, CMDToolError>;

pub mod tracing;
pub use tracing::{init_subscriber, init_test_subscriber};

pub mod score_input;
pub use score_input::ScoreInput;

pub mod config_file;
pub use config_file::ConfigFile;

pub mod detect_irregular_items;
pub use detect_irregular_items::*;
