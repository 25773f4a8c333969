//! Serde wire form.
//!
//! Outcomes serialize as a map tagged by `status`:
//!
//! ```json
//! { "status": "warning", "value": 3, "message": "slow",
//!   "exception": { "typeName": "std::io::error::Error", "message": "eof" } }
//! ```
//!
//! Deserialization goes through the regular factories, so empty messages are
//! rejected and exceptions come back as opaque errors that compare loosely
//! equal to the originals.

use crate::outcome::{Outcome, Repr};
use crate::state::Detail;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tristate_shared::{Exception, ExceptionRecord};

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum RecordRef<'a, T, E> {
    Success {
        value: &'a T,
    },
    Warning {
        value: &'a T,
        message: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        exception: Option<ExceptionRecord>,
    },
    Failure {
        error: &'a E,
        message: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        exception: Option<ExceptionRecord>,
    },
}

#[derive(Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum Record<T, E> {
    Success {
        value: T,
    },
    Warning {
        value: T,
        message: String,
        #[serde(default)]
        exception: Option<ExceptionRecord>,
    },
    Failure {
        error: E,
        message: String,
        #[serde(default)]
        exception: Option<ExceptionRecord>,
    },
}

fn record_of(detail: &Detail) -> Option<ExceptionRecord> {
    detail.exception().map(Exception::to_record)
}

impl<T: Serialize, E: Serialize> Serialize for Outcome<T, E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let record = match &self.repr {
            Repr::Success(value) => RecordRef::Success { value },
            Repr::Warning { value, detail } => RecordRef::Warning {
                value,
                message: detail.message(),
                exception: record_of(detail),
            },
            Repr::Failure { error, detail } => RecordRef::Failure {
                error,
                message: detail.message(),
                exception: record_of(detail),
            },
        };
        record.serialize(serializer)
    }
}

impl<'de, T, E> Deserialize<'de> for Outcome<T, E>
where
    T: Deserialize<'de>,
    E: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = Record::<T, E>::deserialize(deserializer)?;
        let restored = match record {
            Record::Success { value } => Ok(Self::success(value)),
            Record::Warning {
                value,
                message,
                exception,
            } => Detail::parse(message, exception.map(Exception::from_record))
                .map(|detail| Self::warned(value, detail)),
            Record::Failure {
                error,
                message,
                exception,
            } => Detail::parse(message, exception.map(Exception::from_record))
                .map(|detail| Self::failed(error, detail)),
        };
        restored.map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use crate::outcome::{UnitOutcome, ValueCustomOutcome, ValueOutcome};
    use serde_json::json;
    use std::error::Error;
    use std::io;

    #[test]
    fn tagged_by_status() -> Result<(), Box<dyn Error>> {
        let warning = ValueOutcome::warning(3, "slow")?;
        assert_eq!(
            serde_json::to_value(&warning)?,
            json!({ "status": "warning", "value": 3, "message": "slow" })
        );

        let failure = ValueCustomOutcome::<i32, String>::failure("E42".to_owned(), "down")?;
        assert_eq!(
            serde_json::to_value(&failure)?,
            json!({ "status": "failure", "error": "E42", "message": "down" })
        );
        Ok(())
    }

    #[test]
    fn exceptions_come_back_loosely_equal() -> Result<(), Box<dyn Error>> {
        let original = UnitOutcome::fail_with("io failed", io::Error::other("eof"))?;
        let text = serde_json::to_string(&original)?;
        let restored: UnitOutcome = serde_json::from_str(&text)?;

        assert_eq!(restored, original);
        assert!(!restored.strict_eq(&original));
        assert_eq!(
            restored.exception().map(ToString::to_string),
            Some("eof".to_owned())
        );
        Ok(())
    }

    #[test]
    fn empty_messages_are_rejected_on_read() -> Result<(), Box<dyn Error>> {
        let parsed = serde_json::from_value::<UnitOutcome>(json!({
            "status": "failure",
            "error": null,
            "message": ""
        }));
        let message = parsed.err().map(|error| error.to_string());
        assert!(message.is_some_and(|message| message.contains("non-empty")));

        let spaced: UnitOutcome = serde_json::from_value(json!({
            "status": "warning",
            "value": null,
            "message": "  "
        }))?;
        assert_eq!(spaced.message(), Some("  "));
        Ok(())
    }
}
