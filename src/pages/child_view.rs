use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::ui::{
    Badge, BadgeTone, Button, ButtonSize, Card, CardContent, CardHeader, CardTitle, Tab, TabList,
    TabPanel, TabPanels, Tabs,
};
use crate::graphql::operations::{
    ChildVariables, CompleteAssignment, CompleteAssignmentVariables, MyAssignmentsQuery,
};
use crate::graphql::{use_mutation, use_query, MutationHandle, QueryHandle};
use crate::models::{Assignment, Role, SessionStore};

/// Split into (open, completed), keeping server order.
pub fn partition_assignments(assignments: Vec<Assignment>) -> (Vec<Assignment>, Vec<Assignment>) {
    assignments
        .into_iter()
        .partition(|assignment| !assignment.status.is_completed())
}

/// `XP 50 • Gold 10`; missing rewards read as 0.
pub fn reward_line(assignment: &Assignment) -> String {
    format!(
        "XP {} • Gold {}",
        assignment.quest.xp.unwrap_or_default(),
        assignment.quest.gold.unwrap_or_default()
    )
}

#[component]
pub fn ChildView() -> impl IntoView {
    let params = use_params_map();
    let child_id = Memo::new(move |_| params.read().get("childId").unwrap_or_default());
    let sessions = use_context::<SessionStore>().expect("SessionStore context missing");
    let session = sessions.subscribe();

    let assignments = use_query::<MyAssignmentsQuery>(move || ChildVariables {
        child_id: child_id.get(),
    });
    let complete = use_mutation::<CompleteAssignment>();

    let split = Memo::new(move |_| {
        partition_assignments(
            assignments
                .data
                .get()
                .map(|data| data.my_assignments)
                .unwrap_or_default(),
        )
    });
    let open = Signal::derive(move || split.get().0);
    let completed = Signal::derive(move || split.get().1);

    let back_link = move || match session.get().role() {
        Some(Role::Parent) => session
            .get()
            .id()
            .map_or_else(|| "/parent/parent-1".to_string(), |id| Role::Parent.home_route(id)),
        _ => "/parent/parent-1".to_string(),
    };

    view! {
        <div class="max-w-3xl mx-auto p-6 space-y-4">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-semibold">"My Quests"</h1>
                <A href=back_link attr:class="text-indigo-600 text-sm">"Parent dashboard"</A>
            </div>
            <Card>
                <CardHeader>
                    <CardTitle>{move || format!("Assignments for {}", child_id.get())}</CardTitle>
                </CardHeader>
                <CardContent>
                    <Tabs>
                        <TabList>
                            <Tab idx=0>{move || format!("Open ({})", open.get().len())}</Tab>
                            <Tab idx=1>
                                {move || format!("Completed ({})", completed.get().len())}
                            </Tab>
                        </TabList>
                        <TabPanels class="pt-3">
                            <TabPanel idx=0>
                                <AssignmentList
                                    items=open
                                    assignments=assignments
                                    complete=complete
                                    empty="Nothing to do right now"
                                />
                            </TabPanel>
                            <TabPanel idx=1>
                                <AssignmentList
                                    items=completed
                                    assignments=assignments
                                    complete=complete
                                    empty="No completed quests yet"
                                />
                            </TabPanel>
                        </TabPanels>
                    </Tabs>
                </CardContent>
            </Card>
        </div>
    }
}

#[component]
fn AssignmentList(
    items: Signal<Vec<Assignment>>,
    assignments: QueryHandle<MyAssignmentsQuery>,
    complete: MutationHandle<CompleteAssignment>,
    empty: &'static str,
) -> impl IntoView {
    view! {
        <Show
            when=move || !items.get().is_empty()
            fallback=move || view! { <p class="text-sm text-zinc-500">{empty}</p> }
        >
            <ul class="divide-y">
                <For each=move || items.get() key=|item| (item.id.clone(), item.status) let:item>
                    <li class="py-2 flex items-center justify-between gap-3">
                        <div>
                            <div class="font-medium">{item.quest.title.clone()}</div>
                            <div class="text-xs text-zinc-600">{reward_line(&item)}</div>
                        </div>
                        <div class="flex items-center gap-2">
                            <Badge tone=BadgeTone::from(item.status)>{item.status.label()}</Badge>
                            {(!item.status.is_completed())
                                .then(|| {
                                    let assignment_id = item.id.clone();
                                    view! {
                                        <Button
                                            size=ButtonSize::Sm
                                            disabled=complete.pending
                                            on:click=move |_| {
                                                complete
                                                    .run(
                                                        CompleteAssignmentVariables {
                                                            assignment_id: assignment_id.clone(),
                                                        },
                                                        move |_| assignments.refetch(),
                                                    );
                                            }
                                        >
                                            "Complete"
                                        </Button>
                                    }
                                })}
                        </div>
                    </li>
                </For>
            </ul>
        </Show>
    }
}
