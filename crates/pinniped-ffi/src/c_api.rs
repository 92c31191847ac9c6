//! C ABI for hosts without UniFFI support.
//!
//! Every function returns a NUL-terminated UTF-8 buffer owned by this
//! library. The caller must release it exactly once with
//! [`pinniped_free_string`] and must not read it afterwards. Failures come
//! back as `{"error": "..."}` in the same kind of buffer, never as null.

use std::ffi::{CStr, CString, c_char};

use pinniped_engine::{Direction, Document, EngineError, InvalidPosition, codec};

/// Parse markdown and return the document as JSON.
///
/// # Safety
///
/// `input` must be null or point to a NUL-terminated string that stays
/// valid for the duration of the call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pinniped_parse_markdown(input: *const c_char) -> *mut c_char {
    let result = unsafe { read_str(input, "input") }
        .map(|markdown| codec::encode_document(&pinniped_engine::parse(markdown)));
    respond(result)
}

/// Render a JSON document back to markdown. On failure the buffer holds an
/// error object instead of markdown.
///
/// # Safety
///
/// Same contract as [`pinniped_parse_markdown`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pinniped_to_markdown(document_json: *const c_char) -> *mut c_char {
    let result = unsafe { read_document(document_json) }.map(|doc| pinniped_engine::serialize(&doc));
    respond(result)
}

/// Move a table cursor one step. `direction` is 0=up, 1=down, 2=left,
/// 3=right. Returns `{"row","col","valid"}`.
///
/// # Safety
///
/// Same contract as [`pinniped_parse_markdown`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pinniped_table_navigate(
    document_json: *const c_char,
    block_index: i32,
    current_row: i32,
    current_col: i32,
    direction: i32,
) -> *mut c_char {
    let result = unsafe { read_document(document_json) }.and_then(|doc| {
        let position = pinniped_engine::navigate_table(
            &doc,
            index("block_index", block_index)?,
            index("row", current_row)?,
            index("col", current_col)?,
            Direction::from_code(direction)?,
        )?;
        Ok(codec::encode_position(&position))
    });
    respond(result)
}

/// Look up one logical table cell. Returns `{"content": "..."}`.
///
/// # Safety
///
/// Same contract as [`pinniped_parse_markdown`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pinniped_table_get_cell(
    document_json: *const c_char,
    block_index: i32,
    row: i32,
    col: i32,
) -> *mut c_char {
    let result = unsafe { read_document(document_json) }.and_then(|doc| {
        let content = pinniped_engine::get_table_cell(
            &doc,
            index("block_index", block_index)?,
            index("row", row)?,
            index("col", col)?,
        )?;
        Ok(codec::encode_cell(content))
    });
    respond(result)
}

/// Release a buffer returned by any `pinniped_*` function. Null is ignored.
///
/// # Safety
///
/// `s` must be null or a pointer returned by this library that has not
/// been freed yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pinniped_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

unsafe fn read_str<'a>(ptr: *const c_char, name: &str) -> Result<&'a str, EngineError> {
    if ptr.is_null() {
        return Err(EngineError::decode(format!("{name} cannot be null")));
    }
    unsafe { CStr::from_ptr(ptr) }
        .to_str()
        .map_err(|_| EngineError::decode(format!("Invalid UTF-8 in {name}")))
}

unsafe fn read_document(ptr: *const c_char) -> Result<Document, EngineError> {
    let json = unsafe { read_str(ptr, "document JSON") }?;
    codec::decode_document(json)
}

fn index(name: &'static str, value: i32) -> Result<usize, EngineError> {
    usize::try_from(value).map_err(|_| {
        InvalidPosition::Negative {
            name,
            value: i64::from(value),
        }
        .into()
    })
}

fn respond(result: Result<String, EngineError>) -> *mut c_char {
    let body = result.unwrap_or_else(|err| {
        log::warn!("pinniped c api: {err}");
        codec::encode_error(&err)
    });
    into_raw(body)
}

fn into_raw(body: String) -> *mut c_char {
    match CString::new(body) {
        Ok(s) => s.into_raw(),
        // JSON escapes NUL, so the error object always converts
        Err(_) => CString::new(codec::encode_error(&"output contains a NUL byte"))
            .unwrap_or_default()
            .into_raw(),
    }
}
