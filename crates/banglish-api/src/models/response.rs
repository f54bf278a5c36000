//! Response model definition

use serde::Serialize;

/// Echo of the entry as stored after a successful update.
#[derive(Debug, Serialize)]
pub struct UpdatedWord {
  /// Word text after the update.
  pub word: String,
  /// Meaning after the update.
  pub meaning: String,
  /// Category the word lives in after the update.
  pub category: String,
}

/// Body of a successful `PUT /words/{category}/{id}`.
#[derive(Debug, Serialize)]
pub struct UpdateWordResponse {
  /// Always true on the success path.
  pub success: bool,
  /// Human-readable outcome message.
  pub message: String,
  /// The entry as stored after the update.
  #[serde(rename = "updatedWord")]
  pub updated_word: UpdatedWord,
}

/// Body of a successful `DELETE /words/{category}/{id}`.
#[derive(Debug, Serialize)]
pub struct DeleteWordResponse {
  /// Always true on the success path.
  pub success: bool,
  /// Human-readable outcome message.
  pub message: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn update_response_serializes_camel_case_updated_word() {
    let response = UpdateWordResponse {
      success: true,
      message: "Word updated successfully".to_string(),
      updated_word: UpdatedWord {
        word: "hello".to_string(),
        meaning: "greeting".to_string(),
        category: "greetings".to_string(),
      },
    };

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Word updated successfully");
    assert_eq!(json["updatedWord"]["word"], "hello");
    assert_eq!(json["updatedWord"]["category"], "greetings");
  }

  #[test]
  fn delete_response_serializes_success_and_message() {
    let response = DeleteWordResponse {
      success: true,
      message: "Word deleted successfully".to_string(),
    };

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json, serde_json::json!({"success": true, "message": "Word deleted successfully"}));
  }
}
