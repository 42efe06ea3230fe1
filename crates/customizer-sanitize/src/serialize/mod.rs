//! Serialized structures for sortable settings.
//!
//! Sortable controls store their ordered items as one flattened string in
//! the PHP serialization format that downstream style code already reads:
//!
//! | value         | encoding                         |
//! |---------------|----------------------------------|
//! | null          | `N;`                             |
//! | bool          | `b:0;` / `b:1;`                  |
//! | integer       | `i:42;`                          |
//! | float         | `d:0.5;`                         |
//! | string        | `s:<byte length>:"<bytes>";`     |
//! | array, object | `a:<count>:{<key><value>...}`    |

mod decode;
mod detect;
mod encode;


pub use decode::{unserialize, MAX_DEPTH};
pub use detect::is_serialized;
pub use encode::serialize;

use serde_json::Value;
use tracing::debug;

/// Serialize a sortable value unless it already is a serialized string.
///
/// Applying this twice gives the same result as applying it once.
pub fn sanitize_sortable(value: &Value) -> String {
    if let Value::String(s) = value {
        if is_serialized(s) {
            return s.clone();
        }
    }
    debug!("serializing sortable value");
    serialize(value)
}
