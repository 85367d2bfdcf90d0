use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use super::parse_int;
use crate::components::ui::{
    select_class, Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Input, Label,
    Textarea,
};
use crate::graphql::operations::{
    AssignQuest, AssignQuestVariables, ChildrenQuery, CreateCheckoutSession,
    CreateCheckoutSessionVariables, CreateChild, CreateChildVariables, CreateQuest,
    CreateQuestVariables, CreateReward, CreateRewardVariables, ParentVariables, QuestsQuery,
    RewardsQuery, SubscriptionStatusQuery,
};
use crate::graphql::{use_mutation, use_query, QueryHandle};
use crate::models::Quest;
use crate::models::{SessionStore, UiState};
use crate::navigation::{current_location, open_external};
use crate::services::use_services;

pub const DEFAULT_PARENT_ID: &str = "parent-1";

/// Variables for `createQuest` from the raw form fields. Text goes through
/// as typed; only an empty description becomes `null`.
pub fn quest_variables(
    parent_id: &str,
    title: &str,
    description: &str,
    xp: &str,
    gold: &str,
) -> CreateQuestVariables {
    CreateQuestVariables {
        parent_id: parent_id.to_string(),
        title: title.to_string(),
        description: (!description.is_empty()).then(|| description.to_string()),
        xp: parse_int(xp),
        gold: parse_int(gold),
    }
}

/// Fields of the new-quest form.
#[derive(Clone, Copy)]
pub struct QuestForm {
    pub title: RwSignal<String>,
    pub description: RwSignal<String>,
    pub xp: RwSignal<String>,
    pub gold: RwSignal<String>,
}

impl QuestForm {
    pub fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            xp: RwSignal::new(String::from("50")),
            gold: RwSignal::new(String::from("10")),
        }
    }

    pub fn variables(&self, parent_id: &str) -> CreateQuestVariables {
        quest_variables(
            parent_id,
            &self.title.get_untracked(),
            &self.description.get_untracked(),
            &self.xp.get_untracked(),
            &self.gold.get_untracked(),
        )
    }

    /// After `createQuest` succeeds: clear the text fields, keep the numbers,
    /// reload the list.
    pub fn on_created(&self, refetch: impl FnOnce()) {
        self.title.set(String::new());
        self.description.set(String::new());
        refetch();
    }
}

impl Default for QuestForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Checkout returns to this dashboard on success and to wherever the parent
/// was on cancel.
pub fn checkout_variables(parent_id: &str, origin: &str, href: &str) -> CreateCheckoutSessionVariables {
    CreateCheckoutSessionVariables {
        parent_id: parent_id.to_string(),
        success: format!("{origin}/parent/{parent_id}"),
        cancel: href.to_string(),
    }
}

#[component]
pub fn ParentDashboard() -> impl IntoView {
    let params = use_params_map();
    let parent_id = Memo::new(move |_| {
        params
            .read()
            .get("parentId")
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| DEFAULT_PARENT_ID.to_string())
    });
    let sessions = use_context::<SessionStore>().expect("SessionStore context missing");
    let session = sessions.subscribe();
    let roster = use_query::<ChildrenQuery>(move || ParentVariables {
        parent_id: parent_id.get(),
    });

    view! {
        <div class="max-w-5xl mx-auto p-6 space-y-6">
            <div>
                <h1 class="text-2xl font-semibold">
                    {move || format!("Parent Dashboard ({})", parent_id.get())}
                </h1>
                {move || {
                    session
                        .get()
                        .identity()
                        .map(|identity| {
                            view! {
                                <p class="text-sm text-zinc-600">
                                    {format!("signed in as {} {}", identity.role, identity.id)}
                                </p>
                            }
                        })
                }}
            </div>
            <SubscriptionCard parent_id=parent_id />
            <div class="grid gap-6 md:grid-cols-2">
                <ChildrenCard parent_id=parent_id roster=roster />
                <RewardsCard parent_id=parent_id />
            </div>
            <QuestsCard parent_id=parent_id roster=roster />
        </div>
    }
}

#[component]
fn SubscriptionCard(parent_id: Memo<String>) -> impl IntoView {
    let services = use_services();
    let ui = use_context::<UiState>().expect("UiState context missing");
    let status = use_query::<SubscriptionStatusQuery>(move || ParentVariables {
        parent_id: parent_id.get(),
    });
    let checkout = use_mutation::<CreateCheckoutSession>();
    let platform = services.platform;

    let on_subscribe = move |_| {
        let (origin, href) = current_location();
        let variables = checkout_variables(&parent_id.get_untracked(), &origin, &href);
        checkout.run(variables, move |data| {
            let url = data.url().to_string();
            spawn_local(async move {
                if let Err(e) = open_external(platform, &url).await {
                    ui.report("Could not open checkout", &e);
                }
            });
        });
    };

    view! {
        <Card>
            <CardHeader>
                <CardTitle>"Subscription"</CardTitle>
            </CardHeader>
            <CardContent class="flex items-center justify-between">
                <span class="text-sm">
                    {move || {
                        status
                            .data
                            .get()
                            .and_then(|data| data.subscription_status)
                            .unwrap_or_default()
                            .describe()
                    }}
                </span>
                <Button disabled=checkout.pending on:click=on_subscribe>
                    "Subscribe"
                </Button>
            </CardContent>
        </Card>
    }
}

#[component]
fn ChildrenCard(parent_id: Memo<String>, roster: QueryHandle<ChildrenQuery>) -> impl IntoView {
    let create = use_mutation::<CreateChild>();
    let name = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let variables = CreateChildVariables {
            parent_id: parent_id.get_untracked(),
            name: name.get_untracked(),
        };
        create.run(variables, move |_| {
            name.set(String::new());
            roster.refetch();
        });
    };

    view! {
        <Card>
            <CardHeader>
                <CardTitle>"Children"</CardTitle>
            </CardHeader>
            <CardContent class="space-y-3">
                <ul class="space-y-1">
                    <For
                        each=move || roster.data.get().map(|data| data.children).unwrap_or_default()
                        key=|child| child.id.clone()
                        let:child
                    >
                        <li class="flex items-center justify-between text-sm">
                            <span>{format!("{} (xp {}, gold {})", child.name, child.xp, child.gold)}</span>
                            <A href=format!("/child/{}", child.id) attr:class="text-indigo-600">
                                "View"
                            </A>
                        </li>
                    </For>
                </ul>
                <form class="flex gap-2" on:submit=on_submit>
                    <Input value=name placeholder="Child name" />
                    <Button
                        submit=true
                        variant=ButtonVariant::Secondary
                        size=ButtonSize::Sm
                        disabled=create.pending
                    >
                        "Add"
                    </Button>
                </form>
            </CardContent>
        </Card>
    }
}

/// Children are shared with the children card so both see the same list.
#[component]
fn QuestsCard(parent_id: Memo<String>, roster: QueryHandle<ChildrenQuery>) -> impl IntoView {
    let quests = use_query::<QuestsQuery>(move || ParentVariables {
        parent_id: parent_id.get(),
    });
    let create = use_mutation::<CreateQuest>();
    let form = QuestForm::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let variables = form.variables(&parent_id.get_untracked());
        create.run(variables, move |_| form.on_created(move || quests.refetch()));
    };

    view! {
        <Card>
            <CardHeader>
                <CardTitle>"Quests"</CardTitle>
            </CardHeader>
            <CardContent class="space-y-3">
                <ul class="space-y-2">
                    <For
                        each=move || quests.data.get().map(|data| data.quests).unwrap_or_default()
                        key=|quest| quest.id.clone()
                        let:quest
                    >
                        <QuestRow quest=quest roster=roster />
                    </For>
                </ul>
                <form class="grid gap-2" on:submit=on_submit>
                    <Label html_for="quest-title">"Title"</Label>
                    <Input value=form.title placeholder="Clean Room" attr:id="quest-title" />
                    <Label html_for="quest-description">"Description"</Label>
                    <Textarea value=form.description placeholder="Optional" attr:id="quest-description" />
                    <div class="grid grid-cols-2 gap-2">
                        <div>
                            <Label html_for="quest-xp">"XP"</Label>
                            <Input value=form.xp kind="number" attr:id="quest-xp" />
                        </div>
                        <div>
                            <Label html_for="quest-gold">"Gold"</Label>
                            <Input value=form.gold kind="number" attr:id="quest-gold" />
                        </div>
                    </div>
                    <Button submit=true disabled=create.pending>"Create Quest"</Button>
                </form>
            </CardContent>
        </Card>
    }
}

/// One quest with its own assignment picker. Each row owns its mutation so
/// assigning one quest never blocks another.
#[component]
fn QuestRow(quest: Quest, roster: QueryHandle<ChildrenQuery>) -> impl IntoView {
    let assign = use_mutation::<AssignQuest>();
    let choice = RwSignal::new(String::new());
    let quest_id = quest.id.clone();

    // Back to the placeholder once the assignment settles
    Effect::new(move |_| {
        if !assign.pending.get() {
            choice.set(String::new());
        }
    });

    let on_change = move |ev: leptos::ev::Event| {
        let child_id = event_target_value(&ev);
        choice.set(child_id.clone());
        if !child_id.is_empty() {
            let variables = AssignQuestVariables {
                quest_id: quest_id.clone(),
                child_id,
            };
            assign.run(variables, |_| {});
        }
    };

    view! {
        <li class="flex items-center justify-between gap-3 text-sm">
            <span>{format!("{} (xp {}, gold {})", quest.title, quest.xp, quest.gold)}</span>
            <select
                class=select_class(false, "w-48")
                prop:value=move || choice.get()
                disabled=move || assign.pending.get()
                on:change=on_change
            >
                <option value="">"Assign to…"</option>
                {move || {
                    roster
                        .data
                        .get()
                        .map(|data| data.children)
                        .unwrap_or_default()
                        .into_iter()
                        .map(|child| view! { <option value=child.id>{child.name}</option> })
                        .collect_view()
                }}
            </select>
        </li>
    }
}

#[component]
fn RewardsCard(parent_id: Memo<String>) -> impl IntoView {
    let rewards = use_query::<RewardsQuery>(move || ParentVariables {
        parent_id: parent_id.get(),
    });
    let create = use_mutation::<CreateReward>();
    let name = RwSignal::new(String::from("Movie Night"));
    let threshold = RwSignal::new(String::from("200"));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let variables = CreateRewardVariables {
            parent_id: parent_id.get_untracked(),
            name: name.get_untracked(),
            xp_threshold: parse_int(&threshold.get_untracked()),
        };
        create.run(variables, move |_| rewards.refetch());
    };

    view! {
        <Card>
            <CardHeader>
                <CardTitle>"Rewards"</CardTitle>
            </CardHeader>
            <CardContent class="space-y-3">
                <ul class="space-y-1">
                    <For
                        each=move || rewards.data.get().map(|data| data.rewards).unwrap_or_default()
                        key=|reward| reward.id.clone()
                        let:reward
                    >
                        <li class="text-sm">
                            {format!("{} (xp {}+)", reward.name, reward.xp_threshold)}
                        </li>
                    </For>
                </ul>
                <form class="flex gap-2" on:submit=on_submit>
                    <Input value=name placeholder="Reward" />
                    <Input value=threshold kind="number" class="w-28" />
                    <Button
                        submit=true
                        variant=ButtonVariant::Secondary
                        size=ButtonSize::Sm
                        disabled=create.pending
                    >
                        "Add"
                    </Button>
                </form>
            </CardContent>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quest_variables_from_form() {
        let variables = quest_variables("parent-1", "Clean Room", "", "50", "10");
        assert_eq!(
            variables,
            CreateQuestVariables {
                parent_id: "parent-1".to_string(),
                title: "Clean Room".to_string(),
                description: None,
                xp: 50,
                gold: 10,
            }
        );
    }

    #[test]
    fn test_quest_variables_send_text_as_typed() {
        let variables = quest_variables("p", "  Clean Room ", " after dinner ", "", "lots");
        assert_eq!(variables.title, "  Clean Room ");
        assert_eq!(variables.description.as_deref(), Some(" after dinner "));
        assert_eq!(variables.xp, 0);
        assert_eq!(variables.gold, 0);
    }

    #[test]
    fn test_empty_title_is_still_sent() {
        let variables = quest_variables("p", "", "", "50", "10");
        assert_eq!(variables.title, "");
        assert_eq!(variables.description, None);
    }

    #[test]
    fn test_quest_form_defaults() {
        let form = QuestForm::new();
        let variables = form.variables("parent-1");
        assert_eq!(variables.title, "");
        assert_eq!(variables.xp, 50);
        assert_eq!(variables.gold, 10);
    }

    #[test]
    fn test_quest_created_resets_text_keeps_numbers_and_refetches() {
        let form = QuestForm::new();
        form.title.set("Clean Room".to_string());
        form.description.set("Under the bed too".to_string());
        form.xp.set("75".to_string());
        form.gold.set("20".to_string());

        let variables = form.variables("parent-1");
        assert_eq!(variables.title, "Clean Room");
        assert_eq!(variables.xp, 75);
        assert_eq!(variables.gold, 20);

        let mut refetched = false;
        form.on_created(|| refetched = true);

        assert!(refetched);
        assert_eq!(form.title.get_untracked(), "");
        assert_eq!(form.description.get_untracked(), "");
        assert_eq!(form.xp.get_untracked(), "75");
        assert_eq!(form.gold.get_untracked(), "20");
    }

    #[test]
    fn test_checkout_variables() {
        let variables =
            checkout_variables("parent-1", "http://localhost:5173", "http://localhost:5173/parent/parent-1");
        assert_eq!(variables.success, "http://localhost:5173/parent/parent-1");
        assert_eq!(variables.cancel, "http://localhost:5173/parent/parent-1");
        assert_eq!(variables.parent_id, "parent-1");
    }
}
