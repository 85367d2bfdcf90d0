//! Every query and mutation the pages issue, with typed variables and results.

use serde::{Deserialize, Deserializer, Serialize};

use super::{GraphqlOperation, OperationKind};
use crate::models::{Assignment, Child, Quest, Reward, SubscriptionStatus};

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ParentVariables {
    pub parent_id: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChildVariables {
    pub child_id: String,
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

pub struct ChildrenQuery;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ChildrenData {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub children: Vec<Child>,
}

impl GraphqlOperation for ChildrenQuery {
    const NAME: &'static str = "Children";
    const KIND: OperationKind = OperationKind::Query;
    const DOCUMENT: &'static str = "query Children($parentId: ID!) { children(parentId: $parentId) { __typename id name xp gold parentId } }";

    type Variables = ParentVariables;
    type Data = ChildrenData;
}

pub struct QuestsQuery;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct QuestsData {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub quests: Vec<Quest>,
}

impl GraphqlOperation for QuestsQuery {
    const NAME: &'static str = "Quests";
    const KIND: OperationKind = OperationKind::Query;
    const DOCUMENT: &'static str = "query Quests($parentId: ID!) { quests(parentId: $parentId) { __typename id title description xp gold parentId } }";

    type Variables = ParentVariables;
    type Data = QuestsData;
}

pub struct RewardsQuery;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RewardsData {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub rewards: Vec<Reward>,
}

impl GraphqlOperation for RewardsQuery {
    const NAME: &'static str = "Rewards";
    const KIND: OperationKind = OperationKind::Query;
    const DOCUMENT: &'static str = "query Rewards($parentId: ID!) { rewards(parentId: $parentId) { __typename id name xpThreshold parentId } }";

    type Variables = ParentVariables;
    type Data = RewardsData;
}

pub struct SubscriptionStatusQuery;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionStatusData {
    #[serde(default)]
    pub subscription_status: Option<SubscriptionStatus>,
}

impl GraphqlOperation for SubscriptionStatusQuery {
    const NAME: &'static str = "SubscriptionStatus";
    const KIND: OperationKind = OperationKind::Query;
    const DOCUMENT: &'static str = "query SubscriptionStatus($parentId: ID!) { subscriptionStatus(parentId: $parentId) { active currentPeriodEnd } }";

    type Variables = ParentVariables;
    type Data = SubscriptionStatusData;
}

pub struct MyAssignmentsQuery;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MyAssignmentsData {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub my_assignments: Vec<Assignment>,
}

impl GraphqlOperation for MyAssignmentsQuery {
    const NAME: &'static str = "MyAssignments";
    const KIND: OperationKind = OperationKind::Query;
    const DOCUMENT: &'static str = "query MyAssignments($childId: ID!) { myAssignments(childId: $childId) { __typename id status createdAt completedAt quest { __typename id title xp gold } } }";

    type Variables = ChildVariables;
    type Data = MyAssignmentsData;
}

// ---------------------------------------------------------------------------
// Mutations
// ---------------------------------------------------------------------------

/// `{ id name }` / `{ id title }` echoed back by the create mutations.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Created {
    pub id: String,
    #[serde(default, alias = "title")]
    pub name: Option<String>,
}

pub struct CreateChild;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateChildVariables {
    pub parent_id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateChildData {
    pub create_child: Created,
}

impl GraphqlOperation for CreateChild {
    const NAME: &'static str = "CreateChild";
    const KIND: OperationKind = OperationKind::Mutation;
    const DOCUMENT: &'static str = "mutation CreateChild($parentId: ID!, $name: String!) { createChild(input: {parentId: $parentId, name: $name}) { __typename id name } }";

    type Variables = CreateChildVariables;
    type Data = CreateChildData;
}

pub struct CreateQuest;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestVariables {
    pub parent_id: String,
    pub title: String,
    /// Sent as `null` when the form field is empty
    pub description: Option<String>,
    pub xp: i64,
    pub gold: i64,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestData {
    pub create_quest: Created,
}

impl GraphqlOperation for CreateQuest {
    const NAME: &'static str = "CreateQuest";
    const KIND: OperationKind = OperationKind::Mutation;
    const DOCUMENT: &'static str = "mutation CreateQuest($parentId: ID!, $title: String!, $description: String, $xp: Int!, $gold: Int!) { createQuest(input: {parentId: $parentId, title: $title, description: $description, xp: $xp, gold: $gold}) { __typename id title } }";

    type Variables = CreateQuestVariables;
    type Data = CreateQuestData;
}

pub struct CreateReward;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateRewardVariables {
    pub parent_id: String,
    pub name: String,
    pub xp_threshold: i64,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateRewardData {
    pub create_reward: Created,
}

impl GraphqlOperation for CreateReward {
    const NAME: &'static str = "CreateReward";
    const KIND: OperationKind = OperationKind::Mutation;
    const DOCUMENT: &'static str = "mutation CreateReward($parentId: ID!, $name: String!, $xpThreshold: Int!) { createReward(input: {parentId: $parentId, name: $name, xpThreshold: $xpThreshold}) { __typename id name } }";

    type Variables = CreateRewardVariables;
    type Data = CreateRewardData;
}

pub struct AssignQuest;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AssignQuestVariables {
    pub quest_id: String,
    pub child_id: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AssignQuestData {
    pub assign_quest: Assignment,
}

impl GraphqlOperation for AssignQuest {
    const NAME: &'static str = "AssignQuest";
    const KIND: OperationKind = OperationKind::Mutation;
    const DOCUMENT: &'static str = "mutation AssignQuest($questId: ID!, $childId: ID!) { assignQuest(questId: $questId, childId: $childId) { __typename id status childId quest { __typename id title } } }";

    type Variables = AssignQuestVariables;
    type Data = AssignQuestData;
}

pub struct CompleteAssignment;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompleteAssignmentVariables {
    pub assignment_id: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompleteAssignmentData {
    pub complete_assignment: Assignment,
}

impl GraphqlOperation for CompleteAssignment {
    const NAME: &'static str = "CompleteAssignment";
    const KIND: OperationKind = OperationKind::Mutation;
    const DOCUMENT: &'static str = "mutation CompleteAssignment($assignmentId: ID!) { completeAssignment(assignmentId: $assignmentId) { __typename id status completedAt quest { __typename id title } } }";

    type Variables = CompleteAssignmentVariables;
    type Data = CompleteAssignmentData;
}

pub struct CreateCheckoutSession;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateCheckoutSessionVariables {
    pub parent_id: String,
    pub success: String,
    pub cancel: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateCheckoutSessionData {
    #[serde(default)]
    pub create_checkout_session: Option<String>,
}

impl CreateCheckoutSessionData {
    pub const FALLBACK_URL: &'static str = "https://example.com/checkout";

    /// Checkout URL to navigate to.
    pub fn url(&self) -> &str {
        self.create_checkout_session
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(Self::FALLBACK_URL)
    }
}

impl GraphqlOperation for CreateCheckoutSession {
    const NAME: &'static str = "CreateCheckoutSession";
    const KIND: OperationKind = OperationKind::Mutation;
    const DOCUMENT: &'static str = "mutation CreateCheckoutSession($parentId: ID!, $success: String!, $cancel: String!) { createCheckoutSession(parentId: $parentId, successUrl: $success, cancelUrl: $cancel) }";

    type Variables = CreateCheckoutSessionVariables;
    type Data = CreateCheckoutSessionData;
}
