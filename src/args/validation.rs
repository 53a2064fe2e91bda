use chrono::NaiveDate;
use serde_json::Value;
use std::{fs, path::PathBuf};

/// # Errors
///
/// Will return `Err` if the file is not readable
pub fn check_readable_file(file: &str) -> Result<String, String> {
    // split by semi-colon
    let files = file.split(';');
    for file in files {
        let path = PathBuf::from(file);
        if !path.is_file() || fs::metadata(&path).is_err() {
            return Err(format!("The sql startup script '{file}' is not readable."));
        }
    }
    Ok(file.to_string())
}

/// # Errors
///
/// Will return `Err` if the date is not YYYY-MM-DD
pub fn check_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("'{value}' is not a valid date, expected YYYY-MM-DD."))
}

/// # Errors
///
/// Will return `Err` if the file is not readable or is not valid json
pub fn check_readable_file_and_json(file: &str) -> Result<Value, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The json file '{file}' is not readable."));
    }
    let contents =
        fs::read_to_string(&path).map_err(|e| format!("Could not read '{file}': {e}"))?;
    let json: Value =
        serde_json::from_str(&contents).map_err(|e| format!("'{file}' is not valid json: {e}"))?;
    validate_rounds_format(&json)?;
    Ok(json)
}

/// Validate the rounds json file format
/// format we expect is this:
/// [{ "player": "Name", "course": "Course Name", "score": <int or null>,
/// "par": <int or null>, "date": "YYYY-MM-DD" }, ...]
///
/// # Errors
///
/// Will return `Err` if the json is not in the correct format
pub fn validate_rounds_format(json: &Value) -> Result<(), String> {
    let Some(entries) = json.as_array() else {
        return Err("The rounds file is not in the correct format. Expected an array.".to_string());
    };

    let expected_keys = ["player", "course", "score", "par", "date"];
    for entry in entries {
        let Some(object) = entry.as_object() else {
            return Err(
                "The rounds file is not in the correct format. Expected an array of objects."
                    .to_string(),
            );
        };
        for key in object.keys() {
            if !expected_keys.contains(&key.as_str()) {
                return Err(format!(
                    "The rounds file is not in the correct format. Expected keys: {expected_keys:?}"
                ));
            }
        }

        if !entry["player"].is_string() {
            return Err(
                "The json key player is not in the correct format. Expected a string.".to_string(),
            );
        }
        if !entry["course"].is_string() {
            return Err(
                "The json key course is not in the correct format. Expected a string.".to_string(),
            );
        }
        // score and par may be null: an incomplete round still takes a
        // window slot, it just never counts toward the handicap.
        if !(entry["score"].is_i64() || entry["score"].is_null()) {
            return Err(
                "The json key score is not in the correct format. Expected an integer or null."
                    .to_string(),
            );
        }
        if !(entry["par"].is_i64() || entry["par"].is_null()) {
            return Err(
                "The json key par is not in the correct format. Expected an integer or null."
                    .to_string(),
            );
        }
        let Some(date) = entry["date"].as_str() else {
            return Err(
                "The json key date is not in the correct format. Expected a YYYY-MM-DD string."
                    .to_string(),
            );
        };
        check_date(date)?;
    }

    Ok(())
}
