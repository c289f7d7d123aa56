// src/console.rs
// Interactive front end: reads two term lists, prints their sum, difference
// and product, then evaluates them at the points the user enters.

use std::io::{BufRead, Write};
use std::path::Path;
use log::{debug, info};
use crate::config::PolycalcConfig;
use crate::error::Result;
use crate::polynomial::{Polynomial, TermListReader};
use crate::serialization::save;

pub fn run_session<R: BufRead, W: Write>(input: R, mut output: W, config: &PolycalcConfig) -> Result<()> {
    let mut reader = TermListReader::new(input);

    prompt(&mut output, config, "Enter the first polynomial (n coef1 exp1 coef2 exp2 ...): ")?;
    let p1 = reader.read_polynomial()?;
    prompt(&mut output, config, "Enter the second polynomial (n coef1 exp1 coef2 exp2 ...): ")?;
    let p2 = reader.read_polynomial()?;
    info!("Read P1 with {} terms and P2 with {} terms", p1.len(), p2.len());

    let sum = p1.checked_add(&p2)?;
    let difference = p1.checked_subtract(&p2)?;
    let product = p1.checked_multiply(&p2)?;

    let results = [
        ("P1", &p1),
        ("P2", &p2),
        ("P1 + P2", &sum),
        ("P1 - P2", &difference),
        ("P1 * P2", &product),
    ];
    for (label, polynomial) in results {
        print_polynomial(&mut output, config, label, polynomial)?;
    }

    if let Some(directory) = &config.output.save_directory {
        let all: Vec<Polynomial> = results.iter().map(|(_, p)| (*p).clone()).collect();
        save::polynomials(&all, Path::new(directory))?;
        info!("Saved {} polynomials to {}", all.len(), directory);
    }

    let operands = [("P1", &p1), ("P2", &p2)];
    for i in 0..config.session.evaluation_points {
        let (name, polynomial) = operands[i % operands.len()];
        prompt(&mut output, config, &format!("Enter a value of x to evaluate {}(x): ", name))?;
        let x = reader.read_real()?;
        let value = polynomial.evaluate(x);
        debug!("{}({}) = {}", name, x, value);
        match config.output.precision {
            Some(digits) => writeln!(output, "{}({}): {:.*}", name, x, digits, value)?,
            None => writeln!(output, "{}({}): {}", name, x, value)?,
        }
    }

    output.flush()?;
    Ok(())
}

fn prompt<W: Write>(output: &mut W, config: &PolycalcConfig, text: &str) -> Result<()> {
    if config.session.prompts {
        write!(output, "{}", text)?;
        output.flush()?;
    }
    Ok(())
}

fn print_polynomial<W: Write>(output: &mut W, config: &PolycalcConfig, label: &str, polynomial: &Polynomial) -> Result<()> {
    writeln!(output, "{}: {}", label, polynomial)?;
    if config.output.show_term_list {
        writeln!(output, "    [{}]", polynomial.to_term_list())?;
    }
    Ok(())
}
