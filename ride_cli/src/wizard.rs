//! Interactive terminal driver for the design wizard.
//!
//! Prompts show the current draft value in brackets; an empty answer keeps
//! it. End of input quits the session wherever it happens.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Result;
use ride_core::ride::{AdvancedParams, BasicParams, RideType};
use ride_core::wizard::{WizardState, WizardStep};

use crate::render;

enum Action {
    Next,
    Back,
    Reset,
    Quit,
}

struct Prompter<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// One trimmed answer, `None` at end of input.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn field<T>(&mut self, label: &str, current: T) -> Result<Option<T>>
    where
        T: FromStr + Display + Copy,
    {
        let Some(answer) = self.ask(&format!("{} [{}]: ", label, current))? else {
            return Ok(None);
        };
        if answer.is_empty() {
            return Ok(Some(current));
        }
        match answer.parse() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                writeln!(self.out, "  Not a valid value, keeping {}", current)?;
                Ok(Some(current))
            }
        }
    }

    fn flag(&mut self, label: &str, current: bool) -> Result<Option<bool>> {
        let shown = if current { "Y/n" } else { "y/N" };
        let Some(answer) = self.ask(&format!("{} [{}]: ", label, shown))? else {
            return Ok(None);
        };
        Ok(Some(match answer.to_ascii_lowercase().as_str() {
            "y" | "yes" => true,
            "n" | "no" => false,
            _ => current,
        }))
    }

    /// Ask until the answer names an action; end of input quits.
    fn action(&mut self, prompt: &str, default: Action) -> Result<Action> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(Action::Quit);
            };
            match answer.to_ascii_lowercase().as_str() {
                "" => return Ok(default),
                "n" | "next" => return Ok(Action::Next),
                "b" | "back" => return Ok(Action::Back),
                "r" | "reset" => return Ok(Action::Reset),
                "q" | "quit" => return Ok(Action::Quit),
                other => writeln!(self.out, "  Unknown answer '{}', use n, b, r or q", other)?,
            }
        }
    }

    fn basic_form(&mut self, draft: BasicParams) -> Result<Option<BasicParams>> {
        let Some(num_cabins) = self.field("Number of cabins", draft.num_cabins)? else {
            return Ok(None);
        };
        let Some(diameter_m) = self.field("Wheel diameter (m)", draft.diameter_m)? else {
            return Ok(None);
        };
        let Some(cabin_capacity) = self.field("Capacity per cabin", draft.cabin_capacity)? else {
            return Ok(None);
        };
        let Some(rotation_speed_rpm) = self.field("Rotation speed (rpm)", draft.rotation_speed_rpm)? else {
            return Ok(None);
        };
        Ok(Some(BasicParams {
            num_cabins,
            diameter_m,
            cabin_capacity,
            rotation_speed_rpm,
        }))
    }

    fn advanced_form(&mut self, draft: AdvancedParams) -> Result<Option<AdvancedParams>> {
        let Some(wind_force) = self.flag("Wind force analysis (BS EN 1991-1-4)", draft.wind_force)? else {
            return Ok(None);
        };
        let Some(earthquake_force) = self.flag("Earthquake analysis (EN 1998-1)", draft.earthquake_force)? else {
            return Ok(None);
        };
        let Some(snow_force) = self.flag("Snow load analysis (EN 1991-1-3)", draft.snow_force)? else {
            return Ok(None);
        };
        let Some(height_m) = self.field("Total structure height (m)", draft.height_m)? else {
            return Ok(None);
        };
        let Some(gravity_m_s2) = self.field("Gravitational acceleration (m/s²)", draft.gravity_m_s2)? else {
            return Ok(None);
        };
        let Some(air_density_kg_m3) = self.field("Air density (kg/m³)", draft.air_density_kg_m3)? else {
            return Ok(None);
        };
        let Some(safety_factor) = self.field("Safety factor", draft.safety_factor)? else {
            return Ok(None);
        };
        Ok(Some(AdvancedParams {
            wind_force,
            earthquake_force,
            snow_force,
            height_m,
            gravity_m_s2,
            air_density_kg_m3,
            safety_factor,
        }))
    }
}

/// Drive `state` from the terminal until the user quits or input ends.
///
/// Returns the state the session ended in.
pub fn run<R: BufRead, W: Write>(mut state: WizardState, input: R, out: W) -> Result<WizardState> {
    let mut p = Prompter { input, out };

    loop {
        write!(p.out, "\n{}", render::step_header(&state))?;

        let action = match state.step().clone() {
            WizardStep::RideSelection => {
                writeln!(p.out, "Available ride types: {}", RideType::FerrisWheel)?;
                let Some(answer) = p.ask("Ride type [Ferris Wheel]: ")? else {
                    break;
                };
                let answer = if answer.is_empty() { "Ferris Wheel" } else { answer.as_str() };
                match answer.parse::<RideType>() {
                    Ok(ride) => state = state.select_ride(ride)?,
                    Err(e) => writeln!(p.out, "  {}", e)?,
                }
                continue;
            }

            WizardStep::BasicParameters { .. } => {
                let Some(basic) = p.basic_form(*state.basic_draft())? else {
                    break;
                };
                state = state.with_basic(basic);
                p.action("[Enter] next, (b)ack, (q)uit: ", Action::Next)?
            }

            WizardStep::AdvancedParameters { .. } => {
                let Some(advanced) = p.advanced_form(*state.advanced_draft())? else {
                    break;
                };
                state = state.with_advanced(advanced);
                p.action("[Enter] run analysis, (b)ack, (q)uit: ", Action::Next)?
            }

            WizardStep::ForceAnalysis { analysis, .. } => {
                write!(p.out, "{}", render::analysis_report(&analysis))?;
                p.action("[Enter] component summary, (b)ack, (q)uit: ", Action::Next)?
            }

            WizardStep::ComponentSummary { summary, .. } => {
                write!(p.out, "{}", render::summary_report(&summary))?;
                writeln!(p.out, "Design complete.")?;
                match p.action("(r)eset for a new design, (b)ack, [Enter] quit: ", Action::Quit)? {
                    Action::Next => Action::Quit,
                    other => other,
                }
            }
        };

        state = match action {
            Action::Next => {
                let next = state.next()?;
                for message in next.validation_errors() {
                    writeln!(p.out, "  Error: {}", message)?;
                }
                next
            }
            Action::Back => state.back(),
            Action::Reset => state.reset(),
            Action::Quit => break,
        };
    }

    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive(script: &str) -> (WizardState, String) {
        let mut out = Vec::new();
        let state = run(WizardState::new(), script.as_bytes(), &mut out).unwrap();
        (state, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_defaults_reach_summary() {
        let script = concat!(
            "\n",                 // ride type
            "\n\n\n\n",           // basic form
            "\n",                 // next
            "\n\n\n\n\n\n\n",     // advanced form
            "\n",                 // run analysis
            "\n",                 // summary
            "q\n",
        );
        let (state, output) = drive(script);
        assert_eq!(state.step_number(), 5);
        assert!(output.contains("Max wind velocity v_m:"));
        assert!(output.contains("Electric motor (227.4 kW minimum)"));
        assert!(output.contains("Design complete."));
    }

    #[test]
    fn test_invalid_basic_reprompts() {
        let script = concat!(
            "ferris\n",
            "0\n\n0\n\n", // zero cabins and capacity
            "\n",
        );
        let (state, output) = drive(script);
        assert_eq!(state.step_number(), 2);
        assert!(output.contains("Error: Number of cabins must be greater than 0"));
        assert!(output.contains("Error: Cabin capacity must be greater than 0"));
        assert_eq!(state.basic_draft().num_cabins, 0);
    }

    #[test]
    fn test_unsupported_ride() {
        let (state, output) = drive("roller coaster\n");
        assert_eq!(state.step_number(), 1);
        assert!(output.contains("Ride type not supported yet"));
    }

    #[test]
    fn test_custom_values_and_back() {
        let script = concat!(
            "\n",
            "24\nabc\n\n\n", // 24 cabins, bad diameter keeps 60
            "\n",
            "\n\n\n\n\n\n\n",
            "b\n", // back to basic
        );
        let (state, output) = drive(script);
        assert!(output.contains("Not a valid value, keeping 60"));
        assert_eq!(state.step_number(), 2);
        assert_eq!(state.basic_draft().num_cabins, 24);
        assert_eq!(state.basic_draft().diameter_m, 60.0);
    }

    #[test]
    fn test_mistyped_action_asks_again() {
        let script = concat!(
            "\n",
            "\n\n\n\n",
            "nxt\n", // not an action
            "\n",    // next
        );
        let (state, output) = drive(script);
        assert!(output.contains("Unknown answer 'nxt', use n, b, r or q"));
        assert_eq!(state.step_number(), 3);
    }
}
