use texmip::error::tree::TreeFmt;
use texmip::run::run;

fn main() {
    if let Err(e) = run() {
        eprint!("{}", TreeFmt::message(&e));
        std::process::exit(1);
    }
}
