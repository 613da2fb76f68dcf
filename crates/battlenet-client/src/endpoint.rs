//! Endpoint descriptor table
//!
//! The single source of truth for every resource the client can fetch:
//! one entry per resource name carrying the path template and the API
//! namespace. Path resolution and namespace classification are two
//! projections of the same entry, so the two can never disagree about
//! which names exist.
//!
//! Resource names are stored underscore-delimited; lookups normalize `-`
//! to `_` first, so `item-classes-index` and `item_classes_index` select
//! the same entry.
//!
//! Template placeholders (`{itemId}`, `{server}`, ...) are filled from the
//! caller's field bag. Substituted values are percent-encoded; everything
//! else about the template is emitted verbatim. Two field-bag quirks are
//! part of the wire contract:
//! - `server` is mirrored under `realm` before substitution (alias, not a
//!   rename — templates may reference either key),
//! - for `achievement`, a bare `id` is promoted to `achievementId`.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::error::{Error, Result};

/// API namespace partition required by the vendor for most endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    /// No namespace parameter (only the `account` resource).
    None,
    /// Game-data indices that change with client patches.
    Static,
    /// Server-driven data (auctions, leaderboards, seasons).
    Dynamic,
    /// Account- and character-scoped data behind a user token.
    Profile,
}

impl Namespace {
    /// Tag emitted as `namespace=<tag>-<region>`; `None` emits nothing.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            Namespace::None => None,
            Namespace::Static => Some("static"),
            Namespace::Dynamic => Some("dynamic"),
            Namespace::Profile => Some("profile"),
        }
    }
}

struct Endpoint {
    name: &'static str,
    namespace: Namespace,
    template: &'static str,
}

static ENDPOINTS: &[Endpoint] = &[
    Endpoint { name: "account", namespace: Namespace::None, template: "/oauth/userinfo" },
    // Account Profile API
    Endpoint { name: "wowprofile", namespace: Namespace::Profile, template: "/profile/user/wow" },
    Endpoint { name: "account_profile_summary", namespace: Namespace::Profile, template: "/profile/user/wow" },
    Endpoint { name: "protected_character_profile_summary", namespace: Namespace::Profile, template: "/profile/user/wow/protected-character/{realmId}-{characterId}" },
    Endpoint { name: "account_collections_index", namespace: Namespace::Profile, template: "/profile/user/wow/collections" },
    Endpoint { name: "account_mounts_collection_summary", namespace: Namespace::Profile, template: "/profile/user/wow/collections/mounts" },
    Endpoint { name: "account_pets_collection_summary", namespace: Namespace::Profile, template: "/profile/user/wow/collections/pets" },
    // Achievement API
    Endpoint { name: "achievement_categories_index", namespace: Namespace::Static, template: "/data/wow/achievement-category/index" },
    Endpoint { name: "achievement_category", namespace: Namespace::Static, template: "/data/wow/achievement-category/{achievementCategoryId}" },
    Endpoint { name: "achievements_index", namespace: Namespace::Static, template: "/data/wow/achievement/index" },
    Endpoint { name: "achievement", namespace: Namespace::Static, template: "/data/wow/achievement/{achievementId}" },
    Endpoint { name: "achievement_media", namespace: Namespace::Static, template: "/data/wow/media/achievement/{achievementId}" },
    // Auction House API
    Endpoint { name: "auctions", namespace: Namespace::Dynamic, template: "/data/wow/connected-realm/{connectedRealmId}/auctions" },
    Endpoint { name: "commodities", namespace: Namespace::Dynamic, template: "/data/wow/auctions/commodities" },
    // Azerite Essence API
    Endpoint { name: "azerite_essences_index", namespace: Namespace::Static, template: "/data/wow/azerite-essence/index" },
    Endpoint { name: "azerite_essence", namespace: Namespace::Static, template: "/data/wow/azerite-essence/{azeriteEssenceId}" },
    Endpoint { name: "azerite_essence_search", namespace: Namespace::Static, template: "/data/wow/search/azerite-essence" },
    Endpoint { name: "azerite_essence_media", namespace: Namespace::Static, template: "/data/wow/media/azerite-essence/{azeriteEssenceId}" },
    // Connected Realm API
    Endpoint { name: "connected_realms_index", namespace: Namespace::Dynamic, template: "/data/wow/connected-realm/index" },
    Endpoint { name: "connected_realm", namespace: Namespace::Dynamic, template: "/data/wow/connected-realm/{connectedRealmId}" },
    Endpoint { name: "connected_realms_search", namespace: Namespace::Dynamic, template: "/data/wow/search/connected-realm" },
    // Covenant API
    Endpoint { name: "covenant_index", namespace: Namespace::Static, template: "/data/wow/covenant/index" },
    Endpoint { name: "covenant", namespace: Namespace::Static, template: "/data/wow/covenant/{covenantId}" },
    Endpoint { name: "covenant_media", namespace: Namespace::Static, template: "/data/wow/media/covenant/{covenantId}" },
    Endpoint { name: "soulbind_index", namespace: Namespace::Static, template: "/data/wow/covenant/soulbind/index" },
    Endpoint { name: "soulbind", namespace: Namespace::Static, template: "/data/wow/covenant/soulbind/{soulbindId}" },
    Endpoint { name: "conduit_index", namespace: Namespace::Static, template: "/data/wow/covenant/conduit/index" },
    Endpoint { name: "conduit", namespace: Namespace::Static, template: "/data/wow/covenant/conduit/{conduitId}" },
    // Creature API
    Endpoint { name: "creature_families_index", namespace: Namespace::Static, template: "/data/wow/creature-family/index" },
    Endpoint { name: "creature_family", namespace: Namespace::Static, template: "/data/wow/creature-family/{creatureFamilyId}" },
    Endpoint { name: "creature_types_index", namespace: Namespace::Static, template: "/data/wow/creature-type/index" },
    Endpoint { name: "creature_type", namespace: Namespace::Static, template: "/data/wow/creature-type/{creatureTypeId}" },
    Endpoint { name: "creature", namespace: Namespace::Static, template: "/data/wow/creature/{creatureId}" },
    Endpoint { name: "creature_search", namespace: Namespace::Static, template: "/data/wow/search/creature" },
    Endpoint { name: "creature_display_media", namespace: Namespace::Static, template: "/data/wow/media/creature-display/{creatureDisplayId}" },
    Endpoint { name: "creature_family_media", namespace: Namespace::Static, template: "/data/wow/media/creature-family/{creatureFamilyId}" },
    // Guild Crest API
    Endpoint { name: "guild_crest_components_index", namespace: Namespace::Static, template: "/data/wow/guild-crest/index" },
    Endpoint { name: "guild_crest_border_media", namespace: Namespace::Static, template: "/data/wow/media/guild-crest/border/{borderId}" },
    Endpoint { name: "guild_crest_emblem_media", namespace: Namespace::Static, template: "/data/wow/media/guild-crest/emblem/{emblemId}" },
    // Item API
    Endpoint { name: "item_classes_index", namespace: Namespace::Static, template: "/data/wow/item-class/index" },
    Endpoint { name: "item_class", namespace: Namespace::Static, template: "/data/wow/item-class/{itemClassId}" },
    Endpoint { name: "item_sets_index", namespace: Namespace::Static, template: "/data/wow/item-set/index" },
    Endpoint { name: "item_set", namespace: Namespace::Static, template: "/data/wow/item-set/{itemSetId}" },
    Endpoint { name: "item_subclass", namespace: Namespace::Static, template: "/data/wow/item-class/{itemClassId}/item-subclass/{itemSubclassId}" },
    Endpoint { name: "item", namespace: Namespace::Static, template: "/data/wow/item/{itemId}" },
    Endpoint { name: "item_media", namespace: Namespace::Static, template: "/data/wow/media/item/{itemId}" },
    Endpoint { name: "item_search", namespace: Namespace::Static, template: "/data/wow/search/item" },
    // Journal API
    Endpoint { name: "journal_expansions_index", namespace: Namespace::Static, template: "/data/wow/journal-expansion/index" },
    Endpoint { name: "journal_expansion", namespace: Namespace::Static, template: "/data/wow/journal-expansion/{journalExpansionId}" },
    Endpoint { name: "journal_encounters_index", namespace: Namespace::Static, template: "/data/wow/journal-encounter/index" },
    Endpoint { name: "journal_encounter", namespace: Namespace::Static, template: "/data/wow/journal-encounter/{journalEncounterId}" },
    Endpoint { name: "journal_encounter_search", namespace: Namespace::Static, template: "/data/wow/search/journal-encounter" },
    Endpoint { name: "journal_instances_index", namespace: Namespace::Static, template: "/data/wow/journal-instance/index" },
    Endpoint { name: "journal_instance", namespace: Namespace::Static, template: "/data/wow/journal-instance/{journalInstanceId}" },
    Endpoint { name: "journal_instance_media", namespace: Namespace::Static, template: "/data/wow/media/journal-instance/{journalInstanceId}" },
    // Media Search API
    Endpoint { name: "media_search", namespace: Namespace::Static, template: "/data/wow/search/media" },
    // Modified Crafting API
    Endpoint { name: "modified_crafting_index", namespace: Namespace::Static, template: "/data/wow/modified-crafting/index" },
    Endpoint { name: "modified_crafting_category_index", namespace: Namespace::Static, template: "/data/wow/modified-crafting/category/index" },
    Endpoint { name: "modified_crafting_category", namespace: Namespace::Static, template: "/data/wow/modified-crafting/category/{categoryId}" },
    Endpoint { name: "modified_crafting_reagent_slot_type_index", namespace: Namespace::Static, template: "/data/wow/modified-crafting/reagent-slot-type/index" },
    Endpoint { name: "modified_crafting_reagent_slot_type", namespace: Namespace::Static, template: "/data/wow/modified-crafting/reagent-slot-type/{slotTypeId}" },
    // Mount API
    Endpoint { name: "mounts_index", namespace: Namespace::Static, template: "/data/wow/mount/index" },
    Endpoint { name: "mount", namespace: Namespace::Static, template: "/data/wow/mount/{mountId}" },
    Endpoint { name: "mount_search", namespace: Namespace::Static, template: "/data/wow/search/mount" },
    // Mythic Keystone Affix API
    Endpoint { name: "mythic_keystone_affixes_index", namespace: Namespace::Static, template: "/data/wow/keystone-affix/index" },
    Endpoint { name: "mythic_keystone_affix", namespace: Namespace::Static, template: "/data/wow/keystone-affix/{keystoneAffixId}" },
    Endpoint { name: "mythic_keystone_affix_media", namespace: Namespace::Static, template: "/data/wow/media/keystone-affix/{keystoneAffixId}" },
    // Mythic Keystone Dungeon API
    Endpoint { name: "mythic_keystone_dungeons_index", namespace: Namespace::Dynamic, template: "/data/wow/mythic-keystone/dungeon/index" },
    Endpoint { name: "mythic_keystone_dungeon", namespace: Namespace::Dynamic, template: "/data/wow/mythic-keystone/dungeon/{dungeonId}" },
    Endpoint { name: "mythic_keystone_index", namespace: Namespace::Dynamic, template: "/data/wow/mythic-keystone/index" },
    Endpoint { name: "mythic_keystone_periods_index", namespace: Namespace::Dynamic, template: "/data/wow/mythic-keystone/period/index" },
    Endpoint { name: "mythic_keystone_period", namespace: Namespace::Dynamic, template: "/data/wow/mythic-keystone/period/{periodId}" },
    Endpoint { name: "mythic_keystone_seasons_index", namespace: Namespace::Dynamic, template: "/data/wow/mythic-keystone/season/index" },
    Endpoint { name: "mythic_keystone_season", namespace: Namespace::Dynamic, template: "/data/wow/mythic-keystone/season/{seasonId}" },
    // Mythic Keystone Leaderboard API
    Endpoint { name: "mythic_keystone_leaderboards_index", namespace: Namespace::Dynamic, template: "/data/wow/connected-realm/{connectedRealmId}/mythic-leaderboard/index" },
    Endpoint { name: "mythic_keystone_leaderboard", namespace: Namespace::Dynamic, template: "/data/wow/connected-realm/{connectedRealmId}/mythic-leaderboard/{dungeonId}/period/{period}" },
    // Mythic Raid Leaderboard API
    Endpoint { name: "mythic_raid_leaderboard", namespace: Namespace::Dynamic, template: "/data/wow/leaderboard/hall-of-fame/{raid}/{faction}" },
    // Pet API
    Endpoint { name: "pets_index", namespace: Namespace::Static, template: "/data/wow/pet/index" },
    Endpoint { name: "pet", namespace: Namespace::Static, template: "/data/wow/pet/{petId}" },
    Endpoint { name: "pet_media", namespace: Namespace::Static, template: "/data/wow/media/pet/{petId}" },
    Endpoint { name: "pet_abilities_index", namespace: Namespace::Static, template: "/data/wow/pet-ability/index" },
    Endpoint { name: "pet_ability", namespace: Namespace::Static, template: "/data/wow/pet-ability/{petAbilityId}" },
    Endpoint { name: "pet_ability_media", namespace: Namespace::Static, template: "/data/wow/media/pet-ability/{petAbilityId}" },
    // Playable Class API
    Endpoint { name: "playable_classes_index", namespace: Namespace::Static, template: "/data/wow/playable-class/index" },
    Endpoint { name: "playable_class", namespace: Namespace::Static, template: "/data/wow/playable-class/{classId}" },
    Endpoint { name: "playable_class_media", namespace: Namespace::Static, template: "/data/wow/media/playable-class/{playableClassId}" },
    Endpoint { name: "pvp_talent_slots", namespace: Namespace::Static, template: "/data/wow/playable-class/{classId}/pvp-talent-slots" },
    // Playable Race API
    Endpoint { name: "playable_races_index", namespace: Namespace::Static, template: "/data/wow/playable-race/index" },
    Endpoint { name: "playable_race", namespace: Namespace::Static, template: "/data/wow/playable-race/{playableRaceId}" },
    // Playable Specialization API
    Endpoint { name: "playable_specializations_index", namespace: Namespace::Static, template: "/data/wow/playable-specialization/index" },
    Endpoint { name: "playable_specialization", namespace: Namespace::Static, template: "/data/wow/playable-specialization/{specId}" },
    Endpoint { name: "playable_specialization_media", namespace: Namespace::Static, template: "/data/wow/media/playable-specialization/{specId}" },
    // Power Type API
    Endpoint { name: "power_types_index", namespace: Namespace::Static, template: "/data/wow/power-type/index" },
    Endpoint { name: "power_type", namespace: Namespace::Static, template: "/data/wow/power-type/{powerTypeId}" },
    // Profession API
    Endpoint { name: "professions_index", namespace: Namespace::Static, template: "/data/wow/profession/index" },
    Endpoint { name: "profession", namespace: Namespace::Static, template: "/data/wow/profession/{professionId}" },
    Endpoint { name: "profession_media", namespace: Namespace::Static, template: "/data/wow/media/profession/{professionId}" },
    Endpoint { name: "profession_skill_tier", namespace: Namespace::Static, template: "/data/wow/profession/{professionId}/skill-tier/{skillTierId}" },
    Endpoint { name: "recipe", namespace: Namespace::Static, template: "/data/wow/recipe/{recipeId}" },
    Endpoint { name: "recipe_media", namespace: Namespace::Static, template: "/data/wow/media/recipe/{recipeId}" },
    // PvP Season API
    Endpoint { name: "pvp_seasons_index", namespace: Namespace::Dynamic, template: "/data/wow/pvp-season/index" },
    Endpoint { name: "pvp_season", namespace: Namespace::Dynamic, template: "/data/wow/pvp-season/{pvpSeasonId}" },
    Endpoint { name: "pvp_leaderboards_index", namespace: Namespace::Dynamic, template: "/data/wow/pvp-season/{pvpSeasonId}/pvp-leaderboard/index" },
    Endpoint { name: "pvp_leaderboard", namespace: Namespace::Dynamic, template: "/data/wow/pvp-season/{pvpSeasonId}/pvp-leaderboard/{pvpBracket}" },
    Endpoint { name: "pvp_rewards_index", namespace: Namespace::Dynamic, template: "/data/wow/pvp-season/{pvpSeasonId}/pvp-reward/index" },
    // PvP Tier API
    Endpoint { name: "pvp_tier_media", namespace: Namespace::Static, template: "/data/wow/media/pvp-tier/{pvpTierId}" },
    Endpoint { name: "pvp_tiers_index", namespace: Namespace::Static, template: "/data/wow/pvp-tier/index" },
    Endpoint { name: "pvp_tier", namespace: Namespace::Static, template: "/data/wow/pvp-tier/{pvpTierId}" },
    // Quest API
    Endpoint { name: "quests_index", namespace: Namespace::Static, template: "/data/wow/quest/index" },
    Endpoint { name: "quest", namespace: Namespace::Static, template: "/data/wow/quest/{questId}" },
    Endpoint { name: "quest_categories_index", namespace: Namespace::Static, template: "/data/wow/quest/category/index" },
    Endpoint { name: "quest_category", namespace: Namespace::Static, template: "/data/wow/quest/category/{questCategoryId}" },
    Endpoint { name: "quest_areas_index", namespace: Namespace::Static, template: "/data/wow/quest/area/index" },
    Endpoint { name: "quest_area", namespace: Namespace::Static, template: "/data/wow/quest/area/{questAreaId}" },
    Endpoint { name: "quest_types_index", namespace: Namespace::Static, template: "/data/wow/quest/type/index" },
    Endpoint { name: "quest_type", namespace: Namespace::Static, template: "/data/wow/quest/type/{questTypeId}" },
    // Realm API
    Endpoint { name: "realms_index", namespace: Namespace::Static, template: "/data/wow/realm/index" },
    Endpoint { name: "realm", namespace: Namespace::Static, template: "/data/wow/realm/{server}" },
    Endpoint { name: "realm_search", namespace: Namespace::Static, template: "/data/wow/search/realm" },
    // Region API
    Endpoint { name: "regions_index", namespace: Namespace::Static, template: "/data/wow/region/index" },
    Endpoint { name: "region", namespace: Namespace::Static, template: "/data/wow/region/{regionId}" },
    // Reputations API
    Endpoint { name: "reputation_factions_index", namespace: Namespace::Static, template: "/data/wow/reputation-faction/index" },
    Endpoint { name: "reputation_faction", namespace: Namespace::Static, template: "/data/wow/reputation-faction/{reputationFactionId}" },
    Endpoint { name: "reputation_tiers_index", namespace: Namespace::Static, template: "/data/wow/reputation-tiers/index" },
    Endpoint { name: "reputation_tiers", namespace: Namespace::Static, template: "/data/wow/reputation-tiers/{reputationTiersId}" },
    // Spell API
    Endpoint { name: "spell", namespace: Namespace::Static, template: "/data/wow/spell/{spellId}" },
    Endpoint { name: "spell_media", namespace: Namespace::Static, template: "/data/wow/media/spell/{spellId}" },
    Endpoint { name: "spell_search", namespace: Namespace::Static, template: "/data/wow/search/spell" },
    // Talent API
    Endpoint { name: "talents_index", namespace: Namespace::Static, template: "/data/wow/talent/index" },
    Endpoint { name: "talent", namespace: Namespace::Static, template: "/data/wow/talent/{talentId}" },
    Endpoint { name: "pvp_talents_index", namespace: Namespace::Static, template: "/data/wow/pvp-talent/index" },
    Endpoint { name: "pvp_talent", namespace: Namespace::Static, template: "/data/wow/pvp-talent/{pvpTalentId}" },
    Endpoint { name: "talent_tree_index", namespace: Namespace::Static, template: "/data/wow/talent-tree/index" },
    Endpoint { name: "talent_tree", namespace: Namespace::Static, template: "/data/wow/talent-tree/{talentTreeId}/playable-specialization/{specId}" },
    Endpoint { name: "talent_tree_nodes", namespace: Namespace::Static, template: "/data/wow/talent-tree/{talentTreeId}" },
    // Tech Talent API
    Endpoint { name: "tech_talent_tree_index", namespace: Namespace::Static, template: "/data/wow/tech-talent-tree/index" },
    Endpoint { name: "tech_talent_tree", namespace: Namespace::Static, template: "/data/wow/tech-talent-tree/{techTalentTreeId}" },
    Endpoint { name: "tech_talent_index", namespace: Namespace::Static, template: "/data/wow/tech-talent/index" },
    Endpoint { name: "tech_talent", namespace: Namespace::Static, template: "/data/wow/tech-talent/{techTalentId}" },
    Endpoint { name: "tech_talent_media", namespace: Namespace::Static, template: "/data/wow/media/tech-talent/{techTalentId}" },
    // Title API
    Endpoint { name: "titles_index", namespace: Namespace::Static, template: "/data/wow/title/index" },
    Endpoint { name: "title", namespace: Namespace::Static, template: "/data/wow/title/{titleId}" },
    // WoW Token API
    Endpoint { name: "wow_token_index", namespace: Namespace::Dynamic, template: "/data/wow/token/index" },
    // Character Achievements API
    Endpoint { name: "character_achievements_summary", namespace: Namespace::Profile, template: "/profile/wow/character/{server}/{name}/achievements" },
    Endpoint { name: "character_achievement_statistics", namespace: Namespace::Profile, template: "/profile/wow/character/{server}/{name}/achievements/statistics" },
    // Character Appearance API
    Endpoint { name: "character_appearance_summary", namespace: Namespace::Profile, template: "/profile/wow/character/{server}/{name}/appearance" },
    // Character Collections API
    Endpoint { name: "character_collections", namespace: Namespace::Profile, template: "/profile/wow/character/{server}/{name}/collections" },
    Endpoint { name: "character_collections_mounts", namespace: Namespace::Profile, template: "/profile/wow/character/{server}/{name}/collections/mounts" },
    Endpoint { name: "character_collections_pets", namespace: Namespace::Profile, template: "/profile/wow/character/{server}/{name}/collections/pets" },
    // Character Encounters API
    Endpoint { name: "character_encounters_summary", namespace: Namespace::Profile, template: "/profile/wow/character/{server}/{name}/encounters" },
    Endpoint { name: "character_dungeons", namespace: Namespace::Profile, template: "/profile/wow/character/{server}/{name}/encounters/dungeons" },
    Endpoint { name: "character_raids", namespace: Namespace::Profile, template: "/profile/wow/character/{server}/{name}/encounters/raids" },
    // Character Equipment API
    Endpoint { name: "character_equipment_summary", namespace: Namespace::Profile, template: "/profile/wow/character/{server}/{name}/equipment" },
    // Character Hunter Pets API
    Endpoint { name: "character_hunter_pets_summary", namespace: Namespace::Profile, template: "/profile/wow/character/{server}/{name}/hunter-pets" },
    // Character Media API
    Endpoint { name: "character_media_summary", namespace: Namespace::Profile, template: "/profile/wow/character/{server}/{name}/character-media" },
    // Character Mythic Keystone Profile API
    Endpoint { name: "character_mythic_keystone_profile_index", namespace: Namespace::Profile, template: "/profile/wow/character/{server}/{name}/mythic-keystone-profile" },
    Endpoint { name: "character_mythic_keystone_season_details", namespace: Namespace::Profile, template: "/profile/wow/character/{server}/{name}/mythic-keystone-profile/season/{seasonId}" },
    // Character Professions API
    Endpoint { name: "character_professions", namespace: Namespace::Profile, template: "/profile/wow/character/{server}/{name}/professions" },
    // Character Profile API
    Endpoint { name: "character_profile_summary", namespace: Namespace::Profile, template: "/profile/wow/character/{server}/{name}" },
    Endpoint { name: "character_profile_status", namespace: Namespace::Profile, template: "/profile/wow/character/{server}/{name}/status" },
    // Character PvP API
    Endpoint { name: "character_pvp_bracket_statistics", namespace: Namespace::Profile, template: "/profile/wow/character/{server}/{name}/pvp-bracket/{pvpBracket}" },
    Endpoint { name: "character_pvp_summary", namespace: Namespace::Profile, template: "/profile/wow/character/{server}/{name}/pvp-summary" },
    // Character Quests API
    Endpoint { name: "character_quests", namespace: Namespace::Profile, template: "/profile/wow/character/{server}/{name}/quests" },
    Endpoint { name: "character_completed_quests", namespace: Namespace::Profile, template: "/profile/wow/character/{server}/{name}/quests/completed" },
    // Character Reputations API
    Endpoint { name: "character_reputations_summary", namespace: Namespace::Profile, template: "/profile/wow/character/{server}/{name}/reputations" },
    // Character Soulbinds API
    Endpoint { name: "character_soulbinds", namespace: Namespace::Profile, template: "/profile/wow/character/{server}/{name}/soulbinds" },
    // Character Specializations API
    Endpoint { name: "character_specializations_summary", namespace: Namespace::Profile, template: "/profile/wow/character/{server}/{name}/specializations" },
    // Character Statistics API
    Endpoint { name: "character_statistics_summary", namespace: Namespace::Profile, template: "/profile/wow/character/{server}/{name}/statistics" },
    // Character Titles API
    Endpoint { name: "character_titles_summary", namespace: Namespace::Profile, template: "/profile/wow/character/{server}/{name}/titles" },
    // Guild API
    Endpoint { name: "guild", namespace: Namespace::Profile, template: "/data/wow/guild/{server}/{nameSlug}" },
    Endpoint { name: "guild_activity", namespace: Namespace::Profile, template: "/data/wow/guild/{server}/{nameSlug}/activity" },
    Endpoint { name: "guild_achievements", namespace: Namespace::Profile, template: "/data/wow/guild/{server}/{nameSlug}/achievements" },
    Endpoint { name: "guild_roster", namespace: Namespace::Profile, template: "/data/wow/guild/{server}/{nameSlug}/roster" },
];

static BY_NAME: LazyLock<HashMap<&'static str, &'static Endpoint>> =
    LazyLock::new(|| ENDPOINTS.iter().map(|e| (e.name, e)).collect());

/// rawurlencode equivalent: everything but ALPHA / DIGIT / `-` `_` `.` `~`
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn lookup(resource: &str) -> Result<&'static Endpoint> {
    let normalized = resource.replace('-', "_");
    BY_NAME
        .get(normalized.as_str())
        .copied()
        .ok_or_else(|| Error::UnknownResource(resource.to_string()))
}

/// Namespace classification for a resource name.
///
/// Fails with the same `UnknownResource` as [`resolve`]; the two share one
/// table.
pub fn classify(resource: &str) -> Result<Namespace> {
    lookup(resource).map(|endpoint| endpoint.namespace)
}

/// Resolve a resource name plus field bag to a concrete URL path.
pub fn resolve(resource: &str, fields: &BTreeMap<String, String>) -> Result<String> {
    let endpoint = lookup(resource)?;

    let mut fields = fields.clone();
    if let Some(server) = fields.get("server").cloned() {
        fields.insert("realm".to_string(), server);
    }
    if endpoint.name == "achievement" && !fields.contains_key("achievementId") {
        if let Some(id) = fields.get("id").cloned() {
            fields.insert("achievementId".to_string(), id);
        }
    }

    expand(endpoint.template, &fields)
}

fn expand(template: &str, fields: &BTreeMap<String, String>) -> Result<String> {
    let mut path = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        path.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            // templates are static; an unterminated placeholder cannot occur
            path.push_str(&rest[open..]);
            return Ok(path);
        };
        let key = &after[..close];
        let raw = fields
            .get(key)
            .ok_or_else(|| Error::MissingParameter(key.to_string()))?;
        // character names hit the path lowercased; everything else verbatim
        let value = if key == "name" {
            raw.to_lowercase()
        } else {
            raw.clone()
        };
        path.extend(utf8_percent_encode(&value, PATH_SEGMENT));
        rest = &after[close + 1..];
    }
    path.push_str(rest);
    Ok(path)
}
