//! Browser tests for the page script: tooltips, list filters, the
//! directory map and the "near me" sort.
//!
//! The build points the map at a recording stand-in for Leaflet served from
//! the site's own assets, so marker behaviour is observable offline.
//!
//! Run with: `cargo test --test browser_tooltip -- --ignored`

use headless_chrome::{Browser, LaunchOptions, Tab};
use start_ashtanga::config::TooltipConfig;
use start_ashtanga::tooltip::{self, Rect, TooltipState};
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{Arc, OnceLock};

// ---------------------------------------------------------------------------
// Setup helpers
// ---------------------------------------------------------------------------

const BROWSER_CONFIG: &str = r#"[directory]
enabled = true

[map]
leaflet_css = "/fake-leaflet.css"
leaflet_js = "/fake-leaflet.js"
"#;

/// Records markers and their map membership instead of drawing tiles.
const FAKE_LEAFLET: &str = r#"
window.fakeLeaflet = { markers: [], fits: 0 };
window.L = {
    map: function () {
        var m = {
            fitBounds: function () { window.fakeLeaflet.fits += 1; return m; },
            setView: function () { return m; },
            invalidateSize: function () {}
        };
        return m;
    },
    tileLayer: function () {
        return { addTo: function () { return this; } };
    },
    marker: function (latlng) {
        var mk = {
            latlng: latlng, onMap: false, handlers: {},
            bindPopup: function () { return mk; },
            on: function (ev, fn) { mk.handlers[ev] = fn; return mk; },
            addTo: function () { mk.onMap = true; return mk; },
            remove: function () { mk.onMap = false; return mk; }
        };
        window.fakeLeaflet.markers.push(mk);
        return mk;
    },
    circleMarker: function () {
        var c = {
            addTo: function () { return c; },
            bindPopup: function () { return c; },
            remove: function () {}
        };
        return c;
    }
};
"#;

fn generated_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/browser/generated")
}

/// Build the shipped content with the shala directory enabled.
fn ensure_site_built() {
    static BUILT: OnceLock<()> = OnceLock::new();
    BUILT.get_or_init(|| {
        let bin = env!("CARGO_BIN_EXE_start-ashtanga");
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let source = root.join("tests/browser/content");
        let output_dir = generated_dir();
        for dir in [&source, &output_dir] {
            if dir.exists() {
                std::fs::remove_dir_all(dir).expect("failed to clean browser dir");
            }
        }
        copy_dir(&root.join("content"), &source);
        std::fs::write(source.join("config.toml"), BROWSER_CONFIG).unwrap();
        std::fs::write(source.join("assets/fake-leaflet.js"), FAKE_LEAFLET).unwrap();

        let status = Command::new(bin)
            .args([
                "build",
                "--source",
                source.to_str().unwrap(),
                "--output",
                output_dir.to_str().unwrap(),
                "--temp-dir",
                root.join(".start-ashtanga-browser-temp").to_str().unwrap(),
            ])
            .status()
            .expect("failed to run start-ashtanga");
        assert!(status.success(), "site generation failed");
    });
}

fn copy_dir(src: &Path, dst: &Path) {
    std::fs::create_dir_all(dst).unwrap();
    for entry in std::fs::read_dir(src).unwrap() {
        let entry = entry.unwrap();
        let target = dst.join(entry.file_name());
        if entry.path().is_dir() {
            copy_dir(&entry.path(), &target);
        } else {
            std::fs::copy(entry.path(), target).unwrap();
        }
    }
}

/// Serve the generated site over HTTP. Pages link their fingerprinted
/// assets root-relative (`/style.<hash>.css`), which `file://` would resolve
/// against the filesystem root.
fn server_url() -> &'static str {
    static URL: OnceLock<String> = OnceLock::new();
    URL.get_or_init(|| {
        ensure_site_built();
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let mut stream = stream;
                let mut request_line = String::new();
                if BufReader::new(&stream).read_line(&mut request_line).is_err() {
                    continue;
                }
                let path = request_line.split_whitespace().nth(1).unwrap_or("/");
                let path = path.split('?').next().unwrap_or("/").trim_start_matches('/');
                let mut file = generated_dir().join(path);
                if file.is_dir() {
                    file = file.join("index.html");
                }
                let (status, body) = match std::fs::read(&file) {
                    Ok(body) => ("200 OK", body),
                    Err(_) => ("404 Not Found", std::fs::read(generated_dir().join("404.html")).unwrap_or_default()),
                };
                let mime = match file.extension().and_then(|e| e.to_str()) {
                    Some("css") => "text/css",
                    Some("js") => "application/javascript",
                    Some("svg") => "image/svg+xml",
                    _ => "text/html; charset=utf-8",
                };
                let header = format!(
                    "HTTP/1.1 {status}\r\nContent-Type: {mime}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                    body.len()
                );
                let _ = stream.write_all(header.as_bytes());
                let _ = stream.write_all(&body);
            }
        });
        format!("http://{addr}")
    })
}

fn browser() -> &'static Browser {
    static B: OnceLock<Browser> = OnceLock::new();
    B.get_or_init(|| {
        Browser::new(LaunchOptions {
            window_size: Some((1280, 800)),
            ..Default::default()
        })
        .expect("failed to launch Chrome")
    })
}

fn load(path: &str) -> Arc<Tab> {
    let url = format!("{}{}", server_url(), path);
    let tab = browser().new_tab().unwrap();
    tab.navigate_to(&url).unwrap().wait_until_navigated().unwrap();
    tab
}

fn eval(tab: &Tab, js: &str) -> serde_json::Value {
    tab.evaluate(js, false)
        .expect("failed to evaluate JS")
        .value
        .unwrap_or(serde_json::Value::Null)
}

/// Evaluate an expression whose result is an object or array.
fn eval_json(tab: &Tab, js: &str) -> serde_json::Value {
    let text = eval(tab, &format!("JSON.stringify({js})"));
    serde_json::from_str(text.as_str().expect("expression returned nothing")).unwrap()
}

// ---------------------------------------------------------------------------
// Tooltips
// ---------------------------------------------------------------------------

#[test]
#[ignore]
fn focus_opens_tooltip_and_escape_closes_it() {
    let tab = load("/getting-started/");
    let opened = eval(
        &tab,
        r#"(function() {
            const wrapper = document.querySelector('[data-term="Vinyasa Count"]');
            wrapper.scrollIntoView({ block: 'center' });
            wrapper.querySelector('.glossary-trigger').focus();
            return !wrapper.querySelector('[role=tooltip]').hidden;
        })()"#,
    );
    assert_eq!(opened, serde_json::Value::Bool(true));

    let closed = eval(
        &tab,
        r#"(function() {
            document.dispatchEvent(new KeyboardEvent('keydown', { key: 'Escape' }));
            return document.querySelector('[data-term="Vinyasa Count"] [role=tooltip]').hidden;
        })()"#,
    );
    assert_eq!(closed, serde_json::Value::Bool(true));
}

#[test]
#[ignore]
fn tooltip_near_top_opens_below() {
    let tab = load("/getting-started/");
    let classes = eval(
        &tab,
        r#"(function() {
            const wrapper = document.querySelector('.glossary-tooltip');
            const trigger = wrapper.querySelector('.glossary-trigger');
            window.scrollTo(0, trigger.getBoundingClientRect().top + window.scrollY - 10);
            trigger.focus({ preventScroll: true });
            return wrapper.querySelector('[role=tooltip]').className;
        })()"#,
    );
    assert!(classes.as_str().unwrap().contains("tooltip--bottom"), "{classes}");
}

#[test]
#[ignore]
fn mouse_leave_hides_after_delay() {
    let tab = load("/getting-started/");
    eval(
        &tab,
        r#"(function() {
            const wrapper = document.querySelector('[data-term="Moon Days"]');
            wrapper.scrollIntoView({ block: 'center' });
            wrapper.dispatchEvent(new MouseEvent('mouseenter'));
            wrapper.dispatchEvent(new MouseEvent('mouseleave'));
        })()"#,
    );
    let still_open = eval(
        &tab,
        r#"!document.querySelector('[data-term="Moon Days"] [role=tooltip]').hidden"#,
    );
    assert_eq!(still_open, serde_json::Value::Bool(true));

    std::thread::sleep(std::time::Duration::from_millis(400));
    let hidden = eval(
        &tab,
        r#"document.querySelector('[data-term="Moon Days"] [role=tooltip]').hidden"#,
    );
    assert_eq!(hidden, serde_json::Value::Bool(true));
}

#[test]
#[ignore]
fn script_placement_matches_library() {
    let tab = load("/getting-started/");
    let geometries = [
        TooltipConfig::default(),
        TooltipConfig {
            padding: 0.0,
            flip_threshold: 0.0,
            ..TooltipConfig::default()
        },
        TooltipConfig {
            width: 320.0,
            padding: 24.0,
            flip_threshold: 200.0,
            ..TooltipConfig::default()
        },
    ];
    let viewport = 1280.0;

    let mut cases = Vec::new();
    let mut expected = Vec::new();
    for geo in &geometries {
        for top in [0.0, 50.0, 119.9, 120.0, 199.0, 500.0] {
            for left in [0.0, 60.0, 130.0, 600.0, 1100.0, 1200.0, 1260.0] {
                for width in [10.0, 80.0] {
                    let rect = Rect { left, top, width, height: 20.0 };
                    expected.push(format!("tooltip {}", tooltip::place(rect, viewport, geo).classes()));
                    cases.push(serde_json::json!({
                        "rect": { "left": left, "top": top, "width": width },
                        "geometry": {
                            "tooltipWidth": geo.width.to_string(),
                            "tooltipPadding": geo.padding.to_string(),
                            "tooltipFlip": geo.flip_threshold.to_string(),
                        },
                    }));
                }
            }
        }
    }

    let script = format!(
        r#"{}.map(function (c) {{
            var geo = window.startAshtanga.readGeometry({{ dataset: c.geometry }});
            return window.startAshtanga.place(c.rect, {viewport}, geo);
        }})"#,
        serde_json::Value::Array(cases)
    );
    assert_eq!(eval_json(&tab, &script), serde_json::json!(expected));
}

#[test]
#[ignore]
fn script_hide_delay_matches_library() {
    let tab = load("/getting-started/");
    let delay = eval(&tab, "window.startAshtanga.readGeometry(document.body).hideDelay");
    let configured = TooltipConfig::default().hide_delay_ms;
    assert_eq!(delay.as_u64(), Some(configured));

    // Leave then re-enter inside the delay: the pending hide is cancelled.
    let mut state = TooltipState::new(configured);
    state.show();
    state.request_hide(0);
    state.show();
    assert!(!state.tick(configured * 2));
    assert!(state.is_visible());

    eval(
        &tab,
        r#"(function() {
            const wrapper = document.querySelector('[data-term="Moon Days"]');
            wrapper.scrollIntoView({ block: 'center' });
            wrapper.dispatchEvent(new MouseEvent('mouseenter'));
            wrapper.dispatchEvent(new MouseEvent('mouseleave'));
            wrapper.dispatchEvent(new MouseEvent('mouseenter'));
        })()"#,
    );
    std::thread::sleep(std::time::Duration::from_millis(configured * 2 + 100));
    let visible = eval(
        &tab,
        r#"!document.querySelector('[data-term="Moon Days"] [role=tooltip]').hidden"#,
    );
    assert_eq!(visible, serde_json::Value::Bool(state.is_visible()));
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

#[test]
#[ignore]
fn glossary_filter_updates_count_and_empty_state() {
    let tab = load("/glossary/");
    let count = eval(
        &tab,
        r#"(function() {
            const input = document.getElementById('glossary-search');
            input.value = 'bandha';
            input.dispatchEvent(new Event('input'));
            return document.getElementById('glossary-count').textContent;
        })()"#,
    );
    assert!(count.as_str().unwrap().contains("matching \"bandha\""), "{count}");

    let empty = eval(
        &tab,
        r#"(function() {
            const input = document.getElementById('glossary-search');
            input.value = 'zzzz';
            input.dispatchEvent(new Event('input'));
            const empty = document.getElementById('glossary-empty');
            return empty.hidden ? null : empty.textContent;
        })()"#,
    );
    assert_eq!(empty.as_str(), Some("No terms found matching \"zzzz\""));
}

// ---------------------------------------------------------------------------
// Shala directory
// ---------------------------------------------------------------------------

#[test]
#[ignore]
fn near_me_sorts_by_distance() {
    let tab = load("/shala-directory/");
    eval(
        &tab,
        r#"(function() {
            navigator.geolocation.getCurrentPosition = function (ok) {
                ok({ coords: { latitude: 51.5, longitude: -0.1 } });
            };
            document.querySelector('[data-action=near-me]').click();
        })()"#,
    );
    let first = eval(&tab, r#"document.querySelector('#shala-list .shala-entry').id"#);
    assert_eq!(first.as_str(), Some("shala-east-london-mysore"));
    let distance = eval(
        &tab,
        r#"document.querySelector('#shala-list .shala-entry .shala-distance').textContent"#,
    );
    assert!(distance.as_str().unwrap().ends_with("km away"), "{distance}");
}

#[test]
#[ignore]
fn near_me_allows_one_request_in_flight() {
    let tab = load("/shala-directory/");
    let state = eval_json(
        &tab,
        r#"(function() {
            window.locateCalls = 0;
            navigator.geolocation.getCurrentPosition = function () {
                window.locateCalls += 1;
            };
            const button = document.querySelector('[data-action=near-me]');
            button.click();
            button.click();
            button.click();
            return [window.locateCalls, button.disabled];
        })()"#,
    );
    assert_eq!(state, serde_json::json!([1, true]));
}

#[test]
#[ignore]
fn map_markers_follow_the_filter() {
    let tab = load("/shala-directory/");
    let initial = eval_json(&tab, "window.startAshtanga.visibleMarkers()");
    assert_eq!(initial.as_array().map(Vec::len), Some(4));

    let after = eval_json(
        &tab,
        r#"(function() {
            const before = window.fakeLeaflet.fits;
            const input = document.getElementById('shala-search');
            input.value = 'london';
            input.dispatchEvent(new Event('input'));
            return [
                window.startAshtanga.visibleMarkers(),
                window.fakeLeaflet.markers.filter(function (m) { return m.onMap; }).length,
                window.fakeLeaflet.fits > before
            ];
        })()"#,
    );
    assert_eq!(after, serde_json::json!([["east-london-mysore"], 1, true]));
}

#[test]
#[ignore]
fn marker_click_highlights_card() {
    let tab = load("/shala-directory/");
    let highlighted = eval(
        &tab,
        r#"(function() {
            const marker = window.fakeLeaflet.markers.find(function (m) {
                return m.latlng[0] === 41.1518;
            });
            marker.handlers.click();
            return document.getElementById('shala-porto-ashtanga').classList.contains('shala-highlight');
        })()"#,
    );
    assert_eq!(highlighted, serde_json::Value::Bool(true));

    std::thread::sleep(std::time::Duration::from_millis(2200));
    let cleared = eval(
        &tab,
        r#"document.getElementById('shala-porto-ashtanga').classList.contains('shala-highlight')"#,
    );
    assert_eq!(cleared, serde_json::Value::Bool(false));
}

#[test]
#[ignore]
fn near_me_maps_permission_error() {
    let tab = load("/shala-directory/");
    let message = eval(
        &tab,
        r#"(function() {
            navigator.geolocation.getCurrentPosition = function (ok, err) {
                err({ code: 1 });
            };
            document.querySelector('[data-action=near-me]').click();
            return document.querySelector('.map-error').textContent;
        })()"#,
    );
    assert_eq!(message.as_str(), Some("Location permission denied"));
}
