//! Shared fixtures: one fully-populated bridge as both schemas see it, plus
//! code tables that cover the fixture's codes.

use nbr_codes::{CodeTableRegistry, CountyFipsRow, PlaceRow};
use nbr_engine::Record;

pub fn tables() -> CodeTableRegistry {
    CodeTableRegistry::new(
        vec![
            CountyFipsRow {
                fips: 39041,
                name: "Delaware County".to_string(),
            },
            CountyFipsRow {
                fips: 39049,
                name: "Franklin County".to_string(),
            },
        ],
        vec![PlaceRow {
            place_code: 18000,
            county_abbrev: "FRA".to_string(),
            township: "Columbus".to_string(),
        }],
    )
}

/// Legacy inventory row for the fixture bridge.
pub fn historic_fixture() -> Record {
    Record::from_text_pairs([
        ("STRUCTURE_NUMBER_008", " 2701464"),
        ("STATE_CODE_001", "39"),
        ("COUNTY_CODE_003", "049"),
        ("PLACE_CODE_004", "18000"),
        ("HIGHWAY_DISTRICT_002", "6"),
        ("LAT_016", "39591814"),
        ("LONG_017", "83001800"),
        ("OTHR_STATE_STRUC_NO_099", ""),
        ("OTHER_STATE_CODE_098A", ""),
        ("OTHER_STATE_PCNT_098B", ""),
        ("LOCATION_009", "'0.25 MI S OF SR 161'"),
        ("OWNER_022", "01"),
        ("MAINTENANCE_021", "01"),
        ("FEDERAL_LANDS_105", "0"),
        ("HISTORY_037", "5"),
        ("TOLL_020", "3"),
        ("STRUCTURE_KIND_043A", "3"),
        ("STRUCTURE_TYPE_043B", "2"),
        ("APPR_KIND_044A", "0"),
        ("APPR_TYPE_044B", "0"),
        ("MAIN_UNIT_SPANS_045", "3"),
        ("APPR_SPANS_046", "0"),
        ("DECK_STRUCTURE_TYPE_107", "1"),
        ("SURFACE_TYPE_108A", "1"),
        ("MEMBRANE_TYPE_108B", "0"),
        ("DECK_PROTECTION_108C", "1"),
        ("RAILINGS_036A", "1"),
        ("TRANSITIONS_036B", "1"),
        ("STRUCTURE_LEN_MT_049", "120.0"),
        ("MAX_SPAN_LEN_MT_048", "36.6"),
        ("DECK_WIDTH_MT_052", "13.4"),
        ("ROADWAY_WIDTH_MT_051", "12.2"),
        ("LEFT_CURB_MT_050A", "0.0"),
        ("RIGHT_CURB_MT_050B", "0.0"),
        ("APPR_WIDTH_MT_032", "12.2"),
        ("MEDIAN_CODE_033", "0"),
        ("DEGREES_SKEW_034", "15"),
        ("SERVICE_ON_042A", "1"),
        ("SERVICE_UND_042B", "5"),
        ("FEATURES_DESC_006A", "BIG WALNUT CREEK"),
        ("FACILITY_CARRIED_007", "SR 161"),
        ("ROUTE_NUMBER_005D", "161"),
        ("DIRECTION_005E", "0"),
        ("TRAFFIC_DIRECTION_102", "2"),
        ("ROUTE_PREFIX_005B", "3"),
        ("SERVICE_LEVEL_005C", "1"),
        ("FUNCTIONAL_CLASS_026", "16"),
        ("HIGHWAY_SYSTEM_104", "1"),
        ("NATIONAL_NETWORK_110", "0"),
        ("STRAHNET_HIGHWAY_100", "0"),
        ("LRS_INV_ROUTE_013A", "0416100000"),
        ("SUBROUTE_NO_013B", "0"),
        ("KILOPOINT_011", "1.6"),
        ("TRAFFIC_LANES_ON_028A", "2"),
        ("ADT_029", "4800"),
        ("PERCENT_ADT_TRUCK_109", "5"),
        ("YEAR_ADT_030", "2021"),
        ("MIN_VERT_CLR_010", "99.99"),
        ("VERT_CLR_UND_REF_054A", "N"),
        ("VERT_CLR_UND_054B", "0"),
        ("LAT_UND_REF_055A", "N"),
        ("LEFT_LAT_UND_MT_056", "0"),
        ("LAT_UND_MT_055B", "0"),
        ("HORR_CLR_MT_047", "12.2"),
        ("DETOUR_KILOS_019", "8"),
        ("NAVIGATION_038", "0"),
        ("NAV_VERT_CLR_MT_039", "0"),
        ("MIN_NAV_CLR_MT_116", "0"),
        ("NAV_HORR_CLR_MT_040", "0"),
        ("PIER_PROTECTION_111", "1"),
        ("DESIGN_LOAD_031", "5"),
        ("OPR_RATING_METH_063", "1"),
        ("INVENTORY_RATING_066", "32.4"),
        ("OPERATING_RATING_064", "54.1"),
        ("OPEN_CLOSED_POSTED_041", "A"),
        ("FRACTURE_092A", "N"),
        ("UNDWATER_LOOK_SEE_092B", "N"),
        ("DATE_OF_INSPECT_090", "0722"),
        ("FRACTURE_LAST_DATE_093A", ""),
        ("UNDWATER_LAST_DATE_093B", ""),
        ("SPEC_INSPECT_092C", "N"),
        ("SPEC_LAST_DATE_093C", ""),
        ("INSPECT_FREQ_MONTHS_091", "24"),
        ("DECK_COND_058", "6"),
        ("SUPERSTRUCTURE_COND_059", "7"),
        ("SUBSTRUCTURE_COND_060", "6"),
        ("CULVERT_COND_062", "N"),
        ("CHANNEL_COND_061", "7"),
        ("SCOUR_CRITICAL_113", "8"),
        ("BRIDGE_CONDITION", "G"),
        ("LOWEST_RATING", "6"),
        ("APPR_ROAD_EVAL_072", "8"),
        ("WATERWAY_EVAL_071", "8"),
        ("YEAR_BUILT_027", "1960"),
        ("YEAR_RECONSTRUCTED_106", "1995"),
    ])
}

/// Asset-system attributes for the same bridge, as the fetch layer would
/// hand them over (mixed strings / numbers / nulls).
pub fn modern_fixture() -> Record {
    let value = serde_json::json!({
        "sfn": "2701464",
        "county_cd": "FRA",
        "fips_cd": "18000",
        "district": "06",
        "latitude_dd": 39.988372,
        "longitude_dd": -83.005,
        "brdr_brg_sfn": null,
        "brdr_brg_state": null,
        "brdr_brg_pct_resp": null,
        "str_loc": "0.25 MI S OF SR 161",
        "maintenance_authority": "01",
        "hist_sgn_cd": "5",
        "toll_cd": "3",
        "main_str_mtl_cd": "3",
        "main_str_type_cd": "2",
        "apprh_str_mtl_cd": "0",
        "apprh_str_type_cd": "0",
        "main_spans": 3,
        "apprh_spans": 0,
        "deck_cd": "1",
        "wearing_surf_cd": "1",
        "deck_prot_extl_cd": "0",
        "deck_prot_int_cd": "1",
        "survey_railing": "1",
        "survey_transition": "1",
        "ovrl_str_len": 393.7,
        "max_span_len": 120.0,
        "deck_wd": 44.0,
        "brg_rdw_wd": 40.0,
        "sidw_wd_l": 0,
        "sidw_wd_r": 0,
        "apprh_rdw_wd": 40.0,
        "median_cd": "0",
        "skew_deg": 15,
        "type_serv1_cd": "1",
        "type_serv2_cd": "5",
        "invent_feat": "BIG WALNUT CREEK",
        "str_loc_carried": "SR 161",
        "dir_traffic_cd": "2",
        "invent_hwy_sys_cd": "3",
        "invent_hwy_dsgt_cd": "1",
        "func_clas_cd": "16",
        "dsgt_natl_netw_sw": "0",
        "dfns_hwy_dsgt_sw": "0",
        "lanes_on": 2,
        "invent_rte_adt": 4800,
        "minvrt_undclr_c": "N",
        "min_horiz_clr_c": "12.2",
        "bypass_len": 5,
        "nav_control_sw": "0",
        "nav_vrt_clr": 0,
        "min_nav_vrt_clr": 0,
        "nav_horiz_clr": 0,
        "subs_fenders": "1",
        "design_load_cd": "5",
        "rat_inv_load_fact": 32.4,
        "rat_opr_load_fact": 54.1,
        "gen_opr_status": "A",
        "frac_crit_insp_sw": "N",
        "dive_insp_sw": "N",
        "insp_dt": "0722",
        "frac_crit_insp_dt": null,
        "dive_insp_dt": null,
        "spcl_insp_sw": "N",
        "spcl_insp_dt": null,
        "dsgt_insp_freq": 24,
        "deck_summary": "6",
        "sups_summary": "7",
        "subs_summary": "6",
        "culvert_summary": "N",
        "chan_summary": "7",
        "scour_crit_cd": "8",
        "apprh_algn_cd": "8",
        "ww_adequacy_cd": "8",
        "maj_recon_dt": "1995",
    });
    Record::from_json(&value).expect("fixture record is a flat object")
}
