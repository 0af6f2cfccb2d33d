use calamine::{Data, ExcelDateTime};
use chrono::{NaiveDateTime, Timelike};

/// Renders a calamine cell the way it reads in a spreadsheet application.
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),

        Data::String(s) => s.clone(),

        Data::Float(f) => {
            if *f == (*f as i64) as f64 && f.abs() < 1e10 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }

        Data::Int(i) => i.to_string(),

        Data::Bool(b) => {
            if *b {
                "TRUE".to_string()
            } else {
                "FALSE".to_string()
            }
        }

        Data::Error(e) => e.to_string(),

        Data::DateTime(dt) => date_time_text(dt),

        Data::DateTimeIso(s) => s.clone(),

        Data::DurationIso(s) => s.clone(),
    }
}

fn date_time_text(dt: &ExcelDateTime) -> String {
    if dt.is_duration() {
        return dt.as_f64().to_string();
    }

    match dt.as_datetime() {
        Some(datetime) => iso_string(datetime),
        None => dt.as_f64().to_string(),
    }
}

// Dates without a time component drop the time entirely
fn iso_string(datetime: NaiveDateTime) -> String {
    if datetime.time().num_seconds_from_midnight() == 0 {
        datetime.format("%Y-%m-%d").to_string()
    } else {
        datetime.format("%Y-%m-%dT%H:%M:%S").to_string()
    }
}
