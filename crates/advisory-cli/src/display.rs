use advisory_core::{LatLng, MapDisplay, Notifier};

/// Map collaborator that prints what a map widget would draw.
pub struct PrintMap;

impl MapDisplay for PrintMap {
    fn show_marker(&self, at: LatLng, popup_html: &str) {
        println!("marker at {at}");
        for line in popup_html.lines() {
            println!("  {line}");
        }
    }

    fn set_view(&self, at: LatLng, zoom: u8) {
        println!("view centred on {at} at zoom {zoom}");
    }
}

/// Notices go to stderr so stdout stays parseable.
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notice(&self, message: &str) {
        eprintln!("notice: {message}");
    }
}
