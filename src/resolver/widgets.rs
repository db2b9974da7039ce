use crate::config::ResolverOptions;
use crate::workflow::WorkflowNode;
use serde_json::Value;

/// Names of the widget-backed inputs, in declaration order.
pub fn widget_input_names(node: &WorkflowNode) -> Vec<&str> {
    node.inputs
        .iter()
        .filter(|input| input.is_widget())
        .map(|input| input.name.as_str())
        .collect()
}

/// Positional widget values with control-widget sentinels removed, and
/// list-valued entries too when `skip_list_widget_values` is set.
pub fn filter_widget_values<'v>(values: &'v [Value], options: &ResolverOptions) -> Vec<&'v Value> {
    values
        .iter()
        .filter(|value| !(options.skip_list_widget_values && value.is_array()))
        .filter(|value| !is_sentinel(value, &options.widget_sentinels))
        .collect()
}

fn is_sentinel(value: &Value, sentinels: &[String]) -> bool {
    value
        .as_str()
        .is_some_and(|s| sentinels.iter().any(|sentinel| sentinel == s))
}
