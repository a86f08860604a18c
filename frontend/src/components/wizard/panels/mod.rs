//! One panel per wizard step.

mod ad_entries;
mod campaign_info;
mod results;

pub use ad_entries::ad_entries_panel;
pub use campaign_info::campaign_info_panel;
pub use results::results_panel;

use yew::prelude::*;

fn panel_heading(title: &str, subtitle: &str) -> Html {
    html! {
        <div class="panel-heading">
            <h2>{ title.to_string() }</h2>
            <p class="muted">{ subtitle.to_string() }</p>
        </div>
    }
}
