//! The default material catalog.
//!
//! Each entry names a texture file (its lowercased name). Entries with a
//! vanilla index take over that native texture slot. Entries with a parent
//! reuse the parent's texture and only change shading. Texture maps must
//! point at materials declared earlier.

use bevy::prelude::*;

use super::{CatalogBuilder, CatalogError, MaterialBuilder, MaterialCatalog, MaterialId};
use crate::config::ConfigFlag::{HdInfernalTexture, ModelTextures, WinterTheme};

/// Converts an sRGB gray level to the linear brightness multiplier.
fn gray(level: f32) -> f32 {
    LinearRgba::from(Srgba::rgb(level, level, level)).red
}

/// Build the default catalog.
pub fn catalog() -> Result<MaterialCatalog, CatalogError> {
    fn m(name: impl Into<String>) -> MaterialBuilder {
        MaterialBuilder::new(name)
    }

    let mut c = CatalogBuilder::new();
    let none = MaterialId::NONE;

    // Special materials
    c.add(m("UNLIT").with_parent(none).with_unlit(true));
    c.add(m("TRANSPARENT"));
    let lava_flow_map = c.add(m("LAVA_FLOW_MAP"));
    c.add(m("WATER_FLOW_MAP"));
    let underwater_flow_map = c.add(m("UNDERWATER_FLOW_MAP"));
    c.add(m("CAUSTICS_MAP"));
    c.add(m("WATER_NORMAL_MAP_1"));
    let water_normal_map_2 = c.add(m("WATER_NORMAL_MAP_2"));
    c.add(m("WATER_FOAM"));

    // Vanilla texture slots
    c.add(m("WOODEN_DOOR_HANDLE").with_vanilla_index(0));
    let water_flat = c.add(m("WATER_FLAT").with_vanilla_index(1));
    let brick = c.add(m("BRICK").with_vanilla_index(2));
    c.add(m("WOOD_PLANKS_1").with_vanilla_index(3).with_specular(0.35, 30.0));
    c.add(m("LARGE_DOOR").with_vanilla_index(4));
    c.add(m("DARK_WOOD").with_vanilla_index(5));
    let roof_shingles_1 = c.add(
        m("ROOF_SHINGLES_1")
            .with_vanilla_index(6)
            .with_specular(0.5, 30.0),
    );
    c.add(m("WOODEN_SCREEN").with_vanilla_index(7).transparent());
    let leaves_1 = c.add(
        m("LEAVES_1")
            .with_vanilla_index(8)
            .transparent()
            .with_texture_scale(1.3, 1.0),
    );
    c.add(m("TREE_RINGS").with_vanilla_index(9).transparent());
    c.add(m("MOSS_BRANCH").with_vanilla_index(10));
    c.add(m("CONCRETE").with_vanilla_index(11));
    c.add(m("IRON_BARS").with_vanilla_index(12).transparent());
    let painting_landscape = c.add(m("PAINTING_LANDSCAPE").with_vanilla_index(13));
    let painting_king = c.add(m("PAINTING_KING").with_vanilla_index(14));
    let marble_dark = c.add(
        m("MARBLE_DARK")
            .with_vanilla_index(15)
            .with_specular(1.1, 380.0),
    );
    c.add(m("SIMPLE_GRAIN_WOOD").with_vanilla_index(16));
    c.add(m("WATER_DROPLETS").with_vanilla_index(17).transparent());
    c.add(m("HAY").with_vanilla_index(18));
    c.add(m("NET").with_vanilla_index(19).transparent());
    c.add(m("BOOKCASE").with_vanilla_index(20));
    let roof_wooden_slate = c.add(m("ROOF_WOODEN_SLATE").with_vanilla_index(21).transparent());
    c.add(m("CRATE").with_vanilla_index(22).with_specular(0.35, 30.0));
    let brick_brown = c.add(m("BRICK_BROWN").with_vanilla_index(23));
    let water_flat_2 = c.add(m("WATER_FLAT_2").with_vanilla_index(24));
    c.add(m("SWAMP_WATER_FLAT").with_vanilla_index(25));
    c.add(m("WEB").with_vanilla_index(26).transparent());
    let roof_slate = c.add(m("ROOF_SLATE").with_vanilla_index(27));
    c.add(m("MOSS").with_vanilla_index(28).transparent());
    let tropical_leaf = c.add(m("TROPICAL_LEAF").with_vanilla_index(29).transparent());
    let willow_leaves = c.add(
        m("WILLOW_LEAVES")
            .with_vanilla_index(30)
            .transparent()
            .with_texture_scale(1.025, 1.0),
    );
    let lava = c.add(
        m("LAVA")
            .with_vanilla_index(31)
            .with_unlit(true)
            .with_override_base_color(true)
            .with_flow_map(lava_flow_map, 0.05, 36.0, 22.0)
            .with_scroll(0.0, 1.0 / 3.0),
    );
    c.add(m("TREE_DOOR_BROWN").with_vanilla_index(32));
    let maple_leaves = c.add(
        m("MAPLE_LEAVES")
            .with_vanilla_index(33)
            .transparent()
            .with_texture_scale(1.3, 1.0),
    );
    c.add(
        m("MAGIC_STARS")
            .with_vanilla_index(34)
            .transparent()
            .with_unlit(true)
            .with_override_base_color(true),
    );
    c.add(m("SAND_BRICK").with_vanilla_index(35));
    c.add(m("DOOR_TEXTURE").with_vanilla_index(36));
    c.add(m("BLADE").with_vanilla_index(37));
    c.add(m("SANDSTONE").with_vanilla_index(38));
    let painting_elf = c.add(m("PAINTING_ELF").with_vanilla_index(39));
    c.add(
        m("FIRE_CAPE")
            .with_vanilla_index(40)
            .with_unlit(true)
            .with_override_base_color(true)
            .with_flow_map(lava_flow_map, 0.05, 12.0, 4.0)
            .with_scroll(0.0, 1.0 / -3.0),
    );
    let leaves_2 = c.add(
        m("LEAVES_2")
            .with_vanilla_index(41)
            .transparent()
            .with_texture_scale(1.1, 1.1),
    );
    c.add(m("MARBLE").with_vanilla_index(42).with_specular(1.0, 400.0));
    c.add(m("CLEAN_TILE").with_vanilla_index(43));
    let roof_shingles_2 = c.add(m("ROOF_SHINGLES_2").with_vanilla_index(44));
    let roof_brick_tile = c.add(m("ROOF_BRICK_TILE").with_vanilla_index(45));
    c.add(m("STONE_PATTERN").with_vanilla_index(46));
    c.add(m("TEXTURE_47").with_vanilla_index(47));
    c.add(m("HIEROGLYPHICS").with_vanilla_index(48));
    c.add(m("TEXTURE_49").with_vanilla_index(49));
    let roof_brick_tile_green = c.add(m("ROOF_BRICK_TILE_GREEN").with_vanilla_index(50));
    c.add(m("CLEAN_WOOD_FLOOR").with_vanilla_index(51));
    c.add(m("SNOW_FLAKES").with_vanilla_index(52).transparent());
    c.add(m("FROZEN_ABYSSAL_WHIP").with_vanilla_index(53));
    c.add(m("UNUSED_UI_TEXTURE").with_vanilla_index(54));
    let roof_brick_tile_dark = c.add(m("ROOF_BRICK_TILE_DARK").with_vanilla_index(55));
    c.add(m("RED_LAVA").with_vanilla_index(56));
    c.add(m("SMOKE_BATTLESTAFF").with_vanilla_index(57));
    c.add(m("UNUSED_LEAVES").with_vanilla_index(58).transparent());
    let infernal_cape = c.add(
        m("INFERNAL_CAPE")
            .with_vanilla_index(59)
            .with_unlit(true)
            .with_override_base_color(true)
            .with_flow_map(lava_flow_map, 0.02, 12.0, 4.0)
            .with_scroll(0.0, 0.0),
    );
    let leaves_3 = c.add(m("LEAVES_3").with_vanilla_index(60).transparent());

    const CLAN_ICONS: [&str; 28] = [
        "CLAN_SKULL",
        "CLAN_PARTYHAT",
        "CLAN_MAGIC_ICON",
        "CLAN_MIME_HAPPY",
        "CLAN_HELMET",
        "CLAN_SWORDS",
        "CLAN_MIME_SAD",
        "CLAN_SKILLING",
        "CLAN_FARMING",
        "CLAN_ARROWS",
        "CLAN_RUNE",
        "CLAN_THIEVING",
        "CLAN_BONES",
        "CLAN_CABBAGE",
        "CLAN_CAT",
        "CLAN_COMPASS",
        "CLAN_FISH",
        "CLAN_HITPOINTS",
        "CLAN_PRAYER",
        "CLAN_HUNTER",
        "CLAN_RING",
        "CLAN_ROBINHOOD",
        "CLAN_FLOWER",
        "CLAN_DEFENCE",
        "CLAN_ZAMORAK",
        "CLAN_GROUP",
        "CLAN_GROUP_HARDCORE",
        "CLAN_EMPTY",
    ];
    for (slot, name) in (61..).zip(CLAN_ICONS) {
        c.add(m(name).with_vanilla_index(slot).transparent());
    }

    c.add(m("SHAYZIEN_LEAVES_1").with_vanilla_index(89).transparent());
    c.add(
        m("SHAYZIEN_LEAVES_2")
            .with_vanilla_index(90)
            .transparent()
            .with_texture_scale(1.1, 1.1),
    );
    c.add(m("WATER_ICE").with_vanilla_index(91));
    c.add(m("SNOW_ROOF").with_vanilla_index(92));
    c.add(m("SMALL_SNOWFLAKES").with_vanilla_index(93));
    c.add(m("COLOR_MAP").with_vanilla_index(94));
    c.add(m("CONCRETE_DARK").with_vanilla_index(95));
    c.add(m("HIEROGLYPHICS_LARGE").with_vanilla_index(96).transparent());
    c.add(m("HIEROGLYPHICS_SMALL").with_vanilla_index(97).transparent());

    let mut fog_slot = 98;
    for density in ["FOG", "FOG_LIGHT", "FOG_HEAVY"] {
        for speed in ["STATIC", "VERY_SLOW", "SLOW", "MEDIUM", "FAST", "VERY_FAST"] {
            c.add(
                m(format!("{density}_{speed}"))
                    .with_vanilla_index(fog_slot)
                    .transparent(),
            );
            fog_slot += 1;
        }
    }

    c.add(m("SKULLS").with_vanilla_index(116));
    c.add(m("SKULLS_FOG").with_vanilla_index(117));
    c.add(m("SKULLS_FOG_LIGHT").with_vanilla_index(118));
    c.add(m("SKULLS_FOG_DARK").with_vanilla_index(119));

    // Flat colors
    let white = c.add(m("WHITE").with_parent(none));
    c.add(m("GRAY_75").with_parent(none).with_brightness(gray(0.75)));
    c.add(m("GRAY_65").with_parent(none).with_brightness(gray(0.65)));
    c.add(m("GRAY_50").with_parent(none).with_brightness(gray(0.5)));
    c.add(m("GRAY_25").with_parent(none).with_brightness(gray(0.25)));
    c.add(m("BLACK").with_parent(none).with_brightness(0.0));

    c.add(m("BLANK_GLOSS").with_parent(white).with_specular(0.9, 280.0));
    c.add(m("BLANK_SEMIGLOSS").with_parent(white).with_specular(0.35, 80.0));

    // Ground
    c.add(m("SNOW_1"));
    let snow_2 = c.add(m("SNOW_2"));
    c.add(m("SNOW_2_DARK").with_parent(snow_2).with_brightness(0.5));
    c.add(m("SNOW_3"));
    let snow_4 = c.add(m("SNOW_4"));

    let grass_1 = c.add(m("GRASS_1"));
    c.add(m("GRASS_2"));
    c.add(m("GRASS_3"));
    c.add(m("GRASS_SCROLLING").with_parent(grass_1).with_scroll(0.0, 1.0 / 0.7));
    let dirt_1_n = c.add(m("DIRT_1_N"));
    let dirt_1 = c.add(m("DIRT_1").with_normal_map(dirt_1_n).with_specular(0.5, 35.0));
    let dirt_2_n = c.add(m("DIRT_2_N"));
    let dirt_2 = c.add(m("DIRT_2").with_normal_map(dirt_2_n).with_specular(0.4, 30.0));
    let gravel_n = c.add(m("GRAVEL_N"));
    let gravel = c.add(m("GRAVEL").with_normal_map(gravel_n).with_specular(0.4, 130.0));

    c.add(m("DIRT_1_SHINY").with_parent(dirt_1).with_specular(1.1, 380.0));
    c.add(m("DIRT_2_SHINY").with_parent(dirt_2).with_specular(1.1, 380.0));
    c.add(m("GRAVEL_SHINY").with_parent(gravel).with_specular(1.1, 380.0));
    for sand in ["SAND_1", "SAND_2", "SAND_3"] {
        let normal = c.add(m(format!("{sand}_N")));
        c.add(m(sand).with_normal_map(normal).with_specular(0.2, 10.0));
    }
    let grunge_1 = c.add(m("GRUNGE_1"));
    let grunge_2 = c.add(m("GRUNGE_2"));
    c.add(
        m("SUBMERGED_GRUNGE_2")
            .with_parent(grunge_2)
            .with_flow_map_texture(underwater_flow_map)
            .with_flow_map_strength(0.075)
            .with_flow_map_duration(12.0, -12.0),
    );

    let rock_1_n = c.add(m("ROCK_1_N"));
    let rock_1 = c.add(m("ROCK_1").with_normal_map(rock_1_n).with_specular(0.35, 40.0));
    c.add(m("ROCK_1_LIGHT").with_parent(rock_1).with_brightness(1.4));
    let rock_2_n = c.add(m("ROCK_2_N"));
    c.add(
        m("ROCK_2")
            .with_normal_map(rock_2_n)
            .with_specular(0.35, 60.0)
            .with_brightness(1.2),
    );

    let carpet = c.add(m("CARPET"));
    c.add(
        m("FINE_CARPET")
            .with_parent(carpet)
            .with_brightness(1.4)
            .with_texture_scale(0.5, 0.5),
    );

    let falador_path_brick_n = c.add(m("FALADOR_PATH_BRICK_N"));
    c.add(
        m("FALADOR_PATH_BRICK")
            .with_normal_map(falador_path_brick_n)
            .with_specular(0.3, 30.0),
    );
    let jagged_stone_tile_n = c.add(m("JAGGED_STONE_TILE_N"));
    c.add(
        m("JAGGED_STONE_TILE")
            .with_normal_map(jagged_stone_tile_n)
            .with_specular(0.5, 30.0),
    );

    // Tiles and marble
    c.add(m("TILE_SMALL_1").with_specular(0.8, 70.0));
    let tiles_2x2_1_n = c.add(m("TILES_2X2_1_N"));
    let tiles_2x2_1 = c.add(m("TILES_2X2_1").with_normal_map(tiles_2x2_1_n));
    c.add(m("TILES_2X2_1_GLOSS").with_parent(tiles_2x2_1).with_specular(1.0, 70.0));
    c.add(m("TILES_2X2_1_SEMIGLOSS").with_parent(tiles_2x2_1).with_specular(0.5, 300.0));
    let tiles_2x2_2 = c.add(m("TILES_2X2_2").with_specular(0.3, 30.0));
    c.add(m("TILES_2X2_2_GLOSS").with_parent(tiles_2x2_2).with_specular(1.0, 70.0));
    c.add(m("TILES_2X2_2_SEMIGLOSS").with_parent(tiles_2x2_2).with_specular(0.5, 300.0));

    let marble_1 = c.add(m("MARBLE_1"));
    let marble_2 = c.add(m("MARBLE_2"));
    let marble_3 = c.add(m("MARBLE_3"));
    c.add(m("MARBLE_1_GLOSS").with_parent(marble_1).with_specular(0.9, 280.0));
    c.add(m("MARBLE_2_GLOSS").with_parent(marble_2).with_specular(0.8, 300.0));
    c.add(m("MARBLE_3_GLOSS").with_parent(marble_3).with_specular(0.7, 320.0));
    c.add(m("MARBLE_1_SEMIGLOSS").with_parent(marble_1).with_specular(0.35, 80.0));
    let marble_2_semigloss =
        c.add(m("MARBLE_2_SEMIGLOSS").with_parent(marble_2).with_specular(0.3, 100.0));
    c.add(m("MARBLE_3_SEMIGLOSS").with_parent(marble_3).with_specular(0.4, 120.0));

    let lassar_tile_normal = c.add(m("LASSAR_UNDERCITY_TILE_NORMAL"));
    let lassar_tile_disp = c.add(m("LASSAR_UNDERCITY_TILE_DISP"));
    let lassar_tiles = c.add(
        m("LASSAR_UNDERCITY_TILES")
            .with_parent(marble_2_semigloss)
            .with_normal_map(lassar_tile_normal)
            .with_displacement_map(lassar_tile_disp)
            .with_displacement_scale(0.015),
    );
    c.add(
        m("LASSAR_UNDERCITY_TILES_SUBMERGED")
            .with_parent(lassar_tiles)
            .with_flow_map_texture(underwater_flow_map)
            .with_flow_map_strength(0.025)
            .with_flow_map_duration(10.0, -10.0),
    );

    for name in ["HD_LAVA_1", "HD_LAVA_2", "HD_MAGMA_1", "HD_MAGMA_2"] {
        c.add(
            m(name)
                .with_unlit(true)
                .with_override_base_color(true)
                .with_flow_map(lava_flow_map, 0.04, 36.0, 12.0),
        );
    }

    // Wood
    let bark_n = c.add(m("BARK_N"));
    let bark = c.add(m("BARK").with_normal_map(bark_n));
    c.add(m("LIGHT_BARK").with_parent(bark).with_brightness(1.75));
    c.add(m("WOOD_GRAIN"));
    let wood_grain_2_n = c.add(m("WOOD_GRAIN_2_N"));
    let wood_grain_2 = c.add(
        m("WOOD_GRAIN_2")
            .with_normal_map(wood_grain_2_n)
            .with_specular(0.3, 30.0),
    );
    c.add(m("WOOD_GRAIN_2_LIGHT").with_parent(wood_grain_2).with_brightness(1.1));
    c.add(m("WOOD_GRAIN_2_WIDE").with_parent(wood_grain_2).with_texture_scale(1.5, 0.5));
    c.add(m("WOOD_GRAIN_3"));
    let dock_fence = c.add(m("DOCK_FENCE"));
    c.add(m("DOCK_FENCE_DARK").with_parent(dock_fence).with_brightness(0.6));

    // HD replacements for vanilla textures
    c.add(
        m("HD_INFERNAL_CAPE")
            .replace_if(HdInfernalTexture, [infernal_cape])
            .with_unlit(true)
            .with_override_base_color(true)
            .with_flow_map(lava_flow_map, 0.02, 12.0, 4.0)
            .with_scroll(0.0, 1.0 / 3.0),
    );

    let hd_brick_n = c.add(m("HD_BRICK_N"));
    c.add(
        m("HD_BRICK")
            .replace_if(ModelTextures, [brick])
            .with_normal_map(hd_brick_n)
            .with_specular(0.4, 80.0),
    );
    let hd_roof_shingles_n = c.add(m("HD_ROOF_SHINGLES_N"));
    c.add(
        m("HD_ROOF_SHINGLES_1")
            .replace_if(ModelTextures, [roof_shingles_1])
            .with_specular(0.5, 30.0)
            .with_normal_map(hd_roof_shingles_n),
    );
    c.add(
        m("HD_MARBLE_DARK")
            .replace_if(ModelTextures, [marble_dark])
            .with_specular(1.1, 380.0),
    );
    c.add(
        m("HD_BRICK_BROWN")
            .replace_if(ModelTextures, [brick_brown])
            .with_normal_map(hd_brick_n)
            .with_specular(0.4, 80.0),
    );
    c.add(
        m("HD_LAVA_3")
            .replace_if(ModelTextures, [lava])
            .with_unlit(true)
            .with_override_base_color(true)
            .with_flow_map(lava_flow_map, 0.05, 36.0, 22.0)
            .with_scroll(0.0, 1.0 / 3.0),
    );
    c.add(
        m("HD_ROOF_SHINGLES_2")
            .replace_if(ModelTextures, [roof_shingles_2])
            .with_specular(0.3, 30.0)
            .with_normal_map(hd_roof_shingles_n),
    );

    // Stone and metal
    c.add(m("WORN_TILES"));
    let stone_n = c.add(m("STONE_N"));
    let stone = c.add(m("STONE"));
    c.add(
        m("STONE_NORMALED")
            .with_parent(stone)
            .with_normal_map(stone_n)
            .with_specular(0.3, 30.0),
    );
    c.add(m("STONE_LOWGLOSS").with_parent(stone).with_specular(0.3, 30.0));
    c.add(m("STONE_SEMIGLOSS").with_parent(stone).with_specular(0.6, 100.0));
    c.add(m("STONE_SCROLLING").with_parent(stone).with_scroll(0.0, -1.0 / 0.7));

    let wall_stone_n = c.add(m("WALL_STONE_N"));
    c.add(m("WALL_STONE").with_normal_map(wall_stone_n));
    let metallic_1 = c.add(m("METALLIC_1").with_specular(0.2, 20.0));
    c.add(m("METALLIC_1_SEMIGLOSS").with_parent(metallic_1).with_specular(0.3, 80.0));
    c.add(m("METALLIC_1_GLOSS").with_parent(metallic_1).with_specular(0.7, 80.0));
    c.add(m("METALLIC_1_HIGHGLOSS").with_parent(metallic_1).with_specular(1.1, 80.0));
    let metallic_2 = c.add(m("METALLIC_2").with_parent(metallic_1).with_brightness(1.8));
    c.add(m("METALLIC_2_SEMIGLOSS").with_parent(metallic_2).with_specular(0.3, 80.0));
    c.add(m("METALLIC_2_GLOSS").with_parent(metallic_2).with_specular(0.7, 80.0));
    c.add(m("METALLIC_2_HIGHGLOSS").with_parent(metallic_2).with_specular(1.1, 80.0));
    c.add(m("METALLIC_NONE_GLOSS").with_parent(none).with_specular(0.7, 80.0));
    c.add(m("WATTLE_1"));

    // Ice
    let ice_1 = c.add(
        m("ICE_1")
            .with_parent(snow_4)
            .replace_if(WinterTheme, [water_flat_2, water_flat])
            .with_specular(1.1, 200.0),
    );
    c.add(
        m("ICE_1_HIGHGLOSS")
            .with_parent(ice_1)
            .replace_if(WinterTheme, [water_flat_2, water_flat])
            .with_specular(3.1, 30.0),
    );
    c.add(m("ICE_2").with_parent(snow_2).with_specular(1.5, 800.0));
    c.add(m("ICE_3").with_parent(grunge_2).with_specular(1.9, 1000.0));
    c.add(
        m("ICE_4")
            .with_parent(white)
            .with_specular(1.5, 1000.0)
            .with_normal_map(water_normal_map_2),
    );
    c.add(m("SLIME_GRUNGE").with_parent(grunge_1).with_specular(4.1, 60.0));
    c.add(m("WATER_PUDDLE").with_parent(none).with_specular(1.5, 80.0));
    let hd_wood_planks_1_n = c.add(m("HD_WOOD_PLANKS_1_N"));
    c.add(
        m("HD_WOOD_PLANKS_1")
            .with_normal_map(hd_wood_planks_1_n)
            .with_specular(0.3, 40.0)
            .with_brightness(1.2),
    );
    let hd_roof_brick_tile_n = c.add(m("HD_ROOF_BRICK_TILE_N"));
    for (name, base) in [
        ("HD_ROOF_BRICK_TILE", roof_brick_tile),
        ("HD_ROOF_BRICK_TILE_GREEN", roof_brick_tile_green),
        ("HD_ROOF_BRICK_TILE_DARK", roof_brick_tile_dark),
    ] {
        c.add(
            m(name)
                .with_parent(base)
                .replace_if(ModelTextures, [base])
                .with_specular(0.3, 30.0)
                .with_normal_map(hd_roof_brick_tile_n),
        );
    }
    c.add(m("PLANT_GRUNGE_1").with_parent(grunge_1).with_specular(0.25, 25.0));
    c.add(m("PLANT_GRUNGE_2").with_parent(grunge_2).with_specular(0.20, 20.0));
    c.add(
        m("HD_TROPICAL_LEAF")
            .with_parent(tropical_leaf)
            .replace_if(ModelTextures, [tropical_leaf]),
    );

    // Seasonal
    c.add(
        m("WINTER_WILLOW_LEAVES")
            .replace_if(WinterTheme, [willow_leaves])
            .with_texture_scale(1.025, 1.0),
    );
    c.add(
        m("WINTER_MAPLE_LEAVES")
            .replace_if(WinterTheme, [maple_leaves])
            .with_texture_scale(1.3, 1.0),
    );
    c.add(
        m("WINTER_LEAVES_1")
            .replace_if(WinterTheme, [leaves_1])
            .with_texture_scale(1.3, 1.0),
    );
    c.add(
        m("WINTER_LEAVES_2")
            .replace_if(WinterTheme, [leaves_2])
            .with_texture_scale(1.1, 1.1),
    );
    c.add(m("WINTER_LEAVES_3").replace_if(WinterTheme, [leaves_3]));
    c.add(m("WINTER_PAINTING_LANDSCAPE").replace_if(WinterTheme, [painting_landscape]));
    c.add(m("WINTER_PAINTING_KING").replace_if(WinterTheme, [painting_king]));
    c.add(m("WINTER_PAINTING_ELF").replace_if(WinterTheme, [painting_elf]));
    c.add(
        m("WINTER_HD_ROOF_SHINGLES_1")
            .replace_if(WinterTheme, [roof_shingles_1])
            .with_specular(0.5, 30.0)
            .with_normal_map(hd_roof_shingles_n),
    );
    c.add(
        m("WINTER_HD_ROOF_SHINGLES_2")
            .replace_if(WinterTheme, [roof_shingles_2])
            .with_specular(0.3, 30.0)
            .with_normal_map(hd_roof_shingles_n),
    );
    c.add(
        m("WINTER_HD_ROOF_BRICK_TILES")
            .replace_if(
                WinterTheme,
                [roof_brick_tile, roof_brick_tile_green, roof_brick_tile_dark],
            )
            .with_specular(0.3, 30.0)
            .with_normal_map(hd_roof_brick_tile_n),
    );
    c.add(
        m("WINTER_HD_ROOF_SLATE")
            .replace_if(WinterTheme, [roof_slate])
            .with_specular(0.5, 30.0),
    );
    c.add(
        m("WINTER_HD_ROOF_WOODEN_SLATE")
            .replace_if(WinterTheme, [roof_wooden_slate])
            .with_specular(0.5, 30.0),
    );
    let winter_jagged_stone_tile = c.add(
        m("WINTER_JAGGED_STONE_TILE")
            .with_normal_map(jagged_stone_tile_n)
            .with_specular(0.6, 30.0)
            .with_brightness(1.4),
    );
    c.add(
        m("WINTER_JAGGED_STONE_TILE_LIGHT")
            .with_parent(winter_jagged_stone_tile)
            .with_brightness(4.0),
    );
    c.add(
        m("WINTER_JAGGED_STONE_TILE_LIGHTER")
            .with_parent(winter_jagged_stone_tile)
            .with_brightness(12.0),
    );

    c.build()
}
