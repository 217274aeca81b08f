//! Dispatch from a selected [`Demo`] to its implementation.

use crate::config::{Demo, WalkthroughConfig};
use crate::demos::{bmi, euler, greeting, html, names, percentages, person, primes, urls, validation};

/// Url checked by the validation demo.
pub const VALIDATION_URL: &str = "https://davemateer.com";

/// Runs the configured demo, writing every output line to `sink`.
///
/// Each demo is introduced by a `== name ==` header line.
pub fn run(config: &WalkthroughConfig, sink: &mut dyn FnMut(&str)) {
    match config.demo {
        Demo::All => {
            for demo in Demo::EACH {
                run_one(demo, config, sink);
            }
        }
        demo => run_one(demo, config, sink),
    }
}

fn run_one(demo: Demo, config: &WalkthroughConfig, sink: &mut dyn FnMut(&str)) {
    tracing::info!(?demo, "running demo");
    sink(&format!("== {} ==", name(demo)));
    match demo {
        Demo::All => {}
        Demo::Percentages => percentages::show(sink),
        Demo::Euler => euler::show(sink, config.euler_limit),
        Demo::Primes => primes::show(sink),
        Demo::Bmi => bmi::show(sink, config.height, config.weight),
        Demo::Person => person::show(sink),
        Demo::Greeting => greeting::show(sink),
        Demo::Html => html::show(sink),
        Demo::Names => names::show(sink),
        Demo::Urls => urls::show(sink, &config.base_url),
        Demo::Validation => validation::show(sink, &config.url_policy(), VALIDATION_URL),
    }
}

const fn name(demo: Demo) -> &'static str {
    match demo {
        Demo::All => "all",
        Demo::Percentages => "percentages",
        Demo::Euler => "euler",
        Demo::Primes => "primes",
        Demo::Bmi => "bmi",
        Demo::Person => "person",
        Demo::Greeting => "greeting",
        Demo::Html => "html",
        Demo::Names => "names",
        Demo::Urls => "urls",
        Demo::Validation => "validation",
    }
}
