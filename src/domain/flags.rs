//! Translation of resolved parameters into pipeline flags.

use crate::domain::parameters::{FlagRule, ParameterSet, ParameterValue};
use crate::domain::remote_path::RemotePath;
use crate::domain::run_name::RunName;

/// Build the flag arguments for `params`, in declaration order.
///
/// Each set parameter contributes at most one flag; unset parameters and false
/// switches contribute nothing.
pub fn build_flags(params: &ParameterSet, run_name: &RunName) -> Vec<String> {
    let mut args = Vec::new();

    for (descriptor, value) in params.iter() {
        match (descriptor.flag, value) {
            (FlagRule::Switch, ParameterValue::Bool(true)) => args.push(descriptor.flag_name()),
            (FlagRule::Switch, _) => {}
            (FlagRule::Valued, value) => {
                if let Some(rendered) = value.render() {
                    args.push(descriptor.flag_name());
                    args.push(rendered);
                }
            }
            (FlagRule::OutputDir, value) => {
                if let Some(rendered) = value.render() {
                    args.push(descriptor.flag_name());
                    args.push(run_scoped(&rendered, run_name));
                }
            }
        }
    }

    args
}

fn run_scoped(base: &str, run_name: &RunName) -> String {
    RemotePath::new(base).join([run_name.as_str()]).to_string()
}
