//! Drive a session through the C ABI against the live mock server.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use mock_server::{Failure, Fixture, StatusCode};
use urban_ffi::types::{FfiDefinition, FfiSegmentKind};
use urban_ffi::*;

fn spawn(fixture: Fixture) -> CString {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run_with(listener, fixture).await
        })
        .unwrap();
    });

    CString::new(format!("http://{addr}/v0")).unwrap()
}

fn text(ptr: *const c_char) -> String {
    unsafe { CStr::from_ptr(ptr) }.to_str().unwrap().to_string()
}

fn words(session: *const types::FfiSession, slot: u32) -> Vec<String> {
    let list = urban_definitions(session, slot);
    assert!(!list.is_null());
    let l = unsafe { &*list };
    let items: &[FfiDefinition] = if l.len == 0 {
        &[]
    } else {
        unsafe { std::slice::from_raw_parts(l.items, l.len as usize) }
    };
    let out = items.iter().map(|d| text(d.word)).collect();
    urban_free_definition_list(list);
    out
}

#[test]
fn session_lifecycle_over_c_abi() {
    let base = spawn(Fixture::seeded());
    let session = urban_session_new(base.as_ptr());
    assert!(!session.is_null());

    // Step 1: startup loads random and the default quick search.
    assert!(urban_refresh_startup(session));
    assert!(!words(session, URBAN_SLOT_RANDOM).is_empty());
    assert_eq!(words(session, URBAN_SLOT_QUICK_SEARCH), ["urbandictionary"]);

    // Step 2: search for cat and follow its first reference.
    let cat = CString::new("cat").unwrap();
    assert!(urban_refresh_search(session, cat.as_ptr()));

    let list = urban_definitions(session, URBAN_SLOT_SEARCH);
    let definition = unsafe { &*(*list).items };
    assert_eq!(text(definition.word), "cat");
    assert_eq!(definition.def_id, 2);
    let segments = urban_urbanize(definition.definition);
    let segs = unsafe { std::slice::from_raw_parts((*segments).items, (*segments).len as usize) };
    let reference = segs
        .iter()
        .find(|s| matches!(s.kind, FfiSegmentKind::Reference))
        .map(|s| text(s.text))
        .unwrap();
    assert_eq!(reference, "feline");
    urban_free_segment_list(segments);
    urban_free_definition_list(list);

    // Step 3: autocomplete leaves the other slots alone.
    let prefix = CString::new("ca").unwrap();
    assert!(urban_refresh_autocomplete(session, prefix.as_ptr()));
    let list = urban_autocomplete(session);
    let l = unsafe { &*list };
    let terms: Vec<String> = unsafe { std::slice::from_raw_parts(l.items, l.len as usize) }
        .iter()
        .map(|i| text(i.term))
        .collect();
    assert_eq!(terms, ["cat", "catfish"]);
    urban_free_autocomplete_list(list);
    assert_eq!(words(session, URBAN_SLOT_SEARCH), ["cat"]);

    assert!(!urban_has_error(session));
    urban_session_free(session);
}

#[test]
fn failures_set_the_sticky_error_flag() {
    let base = spawn(Fixture::failing(Failure::Status(StatusCode::INTERNAL_SERVER_ERROR)));
    let session = urban_session_new(base.as_ptr());

    assert!(!urban_refresh_random(session));
    assert!(urban_has_error(session));
    assert!(words(session, URBAN_SLOT_RANDOM).is_empty());

    urban_session_free(session);
}
