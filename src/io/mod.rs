macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(std::io::Error::new($kind, $info));
        }
    };
}

macro_rules! parse_value {
    ($token : expr, $name : expr, $line : expr) => {{
        match $token.parse() {
            Ok(value) => value,
            Err(_) => {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    format!(
                        "Invalid value {:?} in line {}. Cannot parse {}.",
                        $token, $line, $name
                    ),
                ));
            }
        }
    }};
}

pub mod matrix_reader;
pub use matrix_reader::MatrixReader;
pub mod matrix_writer;
pub use matrix_writer::MatrixWriter;

pub mod dot_writer;
pub use dot_writer::DotWriter;
pub mod tour_writer;
pub use tour_writer::TourWriter;
