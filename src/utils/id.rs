use crate::constants::REQUEST_ID_LENGTH;

const ALPHABET: [char; 36] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Generates a request id used to correlate client logs with backend logs.
///
/// The id is `REQUEST_ID_LENGTH` characters drawn from `A-Z0-9` by `nanoid`.
///
/// # Examples
/// ```
/// use eml_client::utils::id::request_id;
/// let id = request_id();
/// assert_eq!(id.len(), 30);
/// ```
#[must_use]
pub fn request_id() -> String {
    nanoid::nanoid!(REQUEST_ID_LENGTH, &ALPHABET)
}
