use synthema_core::UNSUPPORTED_KEYWORDS;
use synthema_core::generators::formats::SUPPORTED_FORMATS;

fn main() {
    for format in SUPPORTED_FORMATS {
        println!("format {format}");
    }
    for keyword in UNSUPPORTED_KEYWORDS {
        println!("unsupported {keyword}");
    }
}
