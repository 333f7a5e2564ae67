use shared::segments::SelectionMode;
use shared::teams::Team;
use yew::prelude::*;

use crate::hooks::use_wheel_store;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct TeamCardProps {
    pub team: Team,
    pub is_active: bool,
    pub excluded: Vec<String>,
    pub on_select: Callback<String>,
    pub on_toggle_member: Callback<(String, String)>,
}

#[function_component(TeamCard)]
pub fn team_card(props: &TeamCardProps) -> Html {
    let onclick = {
        let on_select = props.on_select.clone();
        let team_id = props.team.id.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(team_id.clone()))
    };

    let active_count = props
        .team
        .members
        .iter()
        .filter(|m| !props.excluded.contains(&m.id))
        .count();

    html! {
        <div class={if props.is_active { styles::CARD_ACTIVE } else { styles::CARD_HOVER }} {onclick}>
            <div class="flex justify-between items-center mb-3">
                <h3 class={styles::TEXT_H3}>{&props.team.name}</h3>
                <span class={styles::TEXT_SMALL}>
                    {format!("{}/{} in", active_count, props.team.members.len())}
                </span>
            </div>
            <div class="flex flex-wrap gap-2">
                { for props.team.members.iter().map(|member| {
                    // Exclusions only apply (and are only editable) on the active team
                    let is_excluded = props.is_active && props.excluded.contains(&member.id);
                    let chip_class = if !props.is_active {
                        styles::CHIP_IDLE
                    } else if is_excluded {
                        styles::CHIP_EXCLUDED
                    } else {
                        styles::CHIP_INCLUDED
                    };
                    let on_toggle = {
                        let on_toggle_member = props.on_toggle_member.clone();
                        let team_id = props.team.id.clone();
                        let member_id = member.id.clone();
                        let is_active = props.is_active;
                        Callback::from(move |e: MouseEvent| {
                            if is_active {
                                e.stop_propagation();
                                on_toggle_member.emit((team_id.clone(), member_id.clone()));
                            }
                        })
                    };
                    html! {
                        <span key={member.id.clone()} class={chip_class} onclick={on_toggle}>
                            if props.is_active {
                                <span>{if is_excluded { "✕" } else { "✓" }}</span>
                            }
                            {&member.name}
                        </span>
                    }
                }) }
            </div>
        </div>
    }
}

#[function_component(TeamList)]
pub fn team_list() -> Html {
    let store = use_wheel_store();
    let (teams, mode, active_team_id) = store.read(|s| {
        (
            s.teams().to_vec(),
            s.mode(),
            s.active_team_id().map(str::to_string),
        )
    });

    let on_select = {
        let store = store.clone();
        Callback::from(move |team_id: String| {
            store.update(|s| s.select_team(&team_id));
        })
    };

    let on_toggle_member = {
        let store = store.clone();
        Callback::from(move |(team_id, member_id): (String, String)| {
            store.update(|s| s.toggle_member_exclusion(&team_id, &member_id));
        })
    };

    if teams.is_empty() {
        return html! {};
    }

    html! {
        <div class="space-y-4">
            { for teams.into_iter().map(|team| {
                let is_active = mode == SelectionMode::Team && active_team_id.as_deref() == Some(team.id.as_str());
                let excluded: Vec<String> = store.read(|s| {
                    s.excluded_members(&team.id)
                        .map(|set| {
                            let mut ids: Vec<String> = set.iter().cloned().collect();
                            ids.sort();
                            ids
                        })
                        .unwrap_or_default()
                });
                let key = team.id.clone();
                html! {
                    <TeamCard
                        key={key}
                        team={team}
                        is_active={is_active}
                        excluded={excluded}
                        on_select={on_select.clone()}
                        on_toggle_member={on_toggle_member.clone()}
                    />
                }
            }) }
        </div>
    }
}
