// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use anyhow::Error;
use catalog::{Field, SubmissionRequest, Value};
use rustyline::{error::ReadlineError, Editor};
use std::collections::HashMap;

/// Keep asking until the line parses as the field's type. `None` means the
/// optional field was skipped with CTRL-D.
fn read_field(rl: &mut Editor<()>, field: Field<'_>) -> Result<Option<Value>, Error> {
    let optional = field.is_optional();
    let (name, ty) = field.into_tuple();
    let kind = if optional { "optional" } else { "required" };
    let msg = format!("{}{} ({}, {}): ", crate::PROMPT, name, kind, ty);

    loop {
        let line = match rl.readline(&msg) {
            Ok(line) => line,
            Err(ReadlineError::Eof) if optional => return Ok(None),
            Err(ReadlineError::Eof) => {
                log::error!("Field '{}' is required, cannot be empty!", name);
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        match Value::from_str(&line, ty) {
            Ok(value) => return Ok(Some(value)),
            Err(e) => {
                log::error!("Invalid {} for '{}'", ty, name);
                log::error!("Reason: {}", e);
            }
        }
    }
}

/// Ask for every review field, one by one
pub(crate) fn prompt_submission(rl: &mut Editor<()>) -> Result<SubmissionRequest, Error> {
    println!("Press CTRL-D to leave an optional field empty");

    let mut prototype = HashMap::new();
    for field in SubmissionRequest::fields() {
        let (name, _) = field.clone().into_tuple();

        if let Some(value) = read_field(rl, field)? {
            prototype.insert(name, value);
        }
    }

    Ok(SubmissionRequest::from_prototype(&prototype)?)
}
