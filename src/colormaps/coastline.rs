//! Coarse built-in coastline outlines.
//!
//! Continental outlines at roughly 2-5 degree resolution, enough to orient a
//! reader on a full-globe scatter map. Each outline is a (lon, lat) polyline;
//! closed outlines repeat their first vertex at the end.

type Outline = &'static [(f64, f64)];

const NORTH_AMERICA: Outline = &[
    (-168.0, 65.5), (-163.0, 69.5), (-156.5, 71.3), (-141.0, 69.7), (-128.0, 70.2),
    (-117.0, 69.0), (-106.0, 68.5), (-95.0, 71.0), (-90.0, 69.0), (-82.0, 66.5),
    (-87.0, 64.0), (-93.0, 61.0), (-94.5, 58.8), (-88.0, 56.5), (-82.0, 55.0),
    (-79.5, 51.5), (-78.5, 58.0), (-77.5, 62.0), (-72.0, 61.0), (-64.5, 60.0),
    (-61.0, 56.0), (-56.0, 52.0), (-60.0, 50.0), (-66.0, 49.0), (-64.5, 46.0),
    (-61.0, 45.5), (-66.0, 44.5), (-70.0, 43.0), (-70.5, 41.5), (-74.0, 40.5),
    (-76.0, 37.0), (-75.5, 35.2), (-81.0, 31.5), (-80.0, 27.0), (-80.5, 25.2),
    (-82.0, 26.5), (-83.0, 29.5), (-85.5, 30.0), (-89.5, 30.0), (-94.0, 29.5),
    (-97.5, 27.5), (-97.5, 22.0), (-96.0, 19.0), (-92.0, 18.5), (-90.5, 21.0),
    (-87.0, 21.5), (-88.0, 16.0), (-84.0, 15.5), (-83.5, 11.0), (-81.5, 9.0),
    (-77.5, 8.5), (-79.5, 7.5), (-82.0, 8.5), (-85.5, 10.0), (-87.5, 13.0),
    (-92.0, 14.5), (-96.0, 15.7), (-101.0, 17.5), (-105.5, 20.5), (-105.5, 23.0),
    (-109.0, 26.0), (-112.5, 31.0), (-114.5, 30.5), (-110.0, 23.5), (-112.0, 24.5),
    (-115.0, 28.0), (-117.0, 32.5), (-120.5, 34.5), (-122.5, 37.5), (-124.0, 40.5),
    (-124.0, 46.0), (-123.0, 48.5), (-127.5, 50.5), (-130.0, 54.5), (-134.0, 58.0),
    (-140.0, 60.0), (-146.0, 61.0), (-152.0, 59.0), (-157.0, 57.0), (-163.0, 54.8),
    (-158.0, 58.5), (-162.0, 60.0), (-165.0, 62.5), (-168.0, 65.5),
];

const SOUTH_AMERICA: Outline = &[
    (-77.5, 8.5), (-72.0, 12.0), (-63.0, 10.5), (-60.0, 8.5), (-52.0, 5.0),
    (-50.0, 1.0), (-44.0, -2.5), (-35.0, -5.5), (-35.0, -9.0), (-39.0, -13.5),
    (-39.5, -18.0), (-41.0, -22.0), (-48.0, -25.5), (-48.5, -28.5), (-53.0, -33.5),
    (-58.0, -34.5), (-57.0, -38.0), (-62.0, -39.0), (-65.0, -42.0), (-67.5, -46.5),
    (-65.5, -47.5), (-69.0, -51.0), (-68.5, -53.0), (-71.0, -54.5), (-75.0, -51.5),
    (-74.0, -46.0), (-73.5, -42.0), (-73.5, -37.0), (-71.5, -30.0), (-70.5, -23.0),
    (-70.3, -18.0), (-76.0, -14.0), (-79.5, -7.5), (-81.2, -5.0), (-80.0, -2.0),
    (-80.0, 1.0), (-78.0, 2.5), (-77.3, 4.0), (-77.5, 8.5),
];

const AFRICA: Outline = &[
    (-17.0, 21.0), (-16.5, 24.0), (-13.0, 27.5), (-9.5, 31.0), (-6.0, 35.8),
    (-2.0, 35.2), (3.0, 36.8), (10.0, 37.2), (11.0, 34.0), (15.0, 32.3),
    (20.0, 31.0), (25.0, 31.8), (32.0, 31.2), (34.0, 27.8), (36.0, 22.0),
    (38.0, 18.0), (43.0, 12.5), (51.0, 12.0), (51.0, 10.0), (48.0, 5.0),
    (42.0, -1.0), (40.0, -5.0), (39.5, -10.0), (40.5, -15.0), (35.0, -22.0),
    (32.5, -26.0), (30.0, -31.0), (25.5, -34.0), (20.0, -34.8), (18.0, -32.0),
    (15.0, -27.0), (12.0, -18.0), (13.5, -12.0), (12.0, -5.0), (9.0, -1.0),
    (9.5, 3.0), (6.0, 4.5), (2.0, 6.3), (-4.5, 5.2), (-8.0, 4.5),
    (-12.0, 7.0), (-15.5, 11.5), (-17.0, 14.7), (-16.0, 18.0), (-17.0, 21.0),
];

const EURASIA: Outline = &[
    (-9.5, 37.0), (-9.0, 43.0), (-1.5, 43.5), (-1.5, 46.5), (-4.5, 48.5),
    (2.0, 51.0), (5.0, 53.0), (8.5, 54.0), (8.5, 57.0), (10.5, 57.5),
    (10.5, 54.5), (14.0, 54.0), (21.0, 54.7), (21.5, 57.0), (24.0, 59.0),
    (30.0, 60.0), (23.0, 60.5), (21.5, 63.0), (25.5, 65.5), (22.0, 65.8),
    (17.5, 62.5), (18.5, 60.0), (16.5, 57.0), (14.0, 55.5), (12.0, 56.5),
    (10.5, 59.0), (6.0, 58.0), (5.0, 61.5), (10.0, 64.0), (14.5, 68.0),
    (19.0, 70.0), (26.0, 71.0), (31.0, 70.0), (40.0, 67.5), (33.0, 66.5),
    (41.0, 64.5), (44.0, 66.0), (53.0, 68.5), (60.0, 69.0), (68.0, 69.0),
    (73.0, 72.5), (80.0, 72.5), (90.0, 75.5), (100.0, 76.5), (113.0, 73.5),
    (129.0, 72.0), (140.0, 72.5), (152.0, 71.0), (160.0, 69.5), (170.0, 70.0),
    (180.0, 69.0), (180.0, 65.0), (177.0, 62.5), (170.0, 60.0), (163.0, 59.5),
    (160.0, 54.0), (156.5, 51.0), (155.5, 57.5), (150.0, 59.5), (142.0, 59.0),
    (137.0, 54.0), (141.0, 52.0), (140.0, 48.0), (135.0, 43.5), (130.0, 42.5),
    (129.5, 36.0), (126.5, 34.5), (126.0, 37.5), (125.0, 39.5), (121.5, 39.0),
    (122.0, 40.8), (118.0, 39.0), (119.0, 37.0), (122.5, 37.0), (120.5, 34.5),
    (122.0, 31.0), (121.5, 28.0), (119.5, 25.0), (116.0, 22.8), (110.5, 21.0),
    (108.0, 21.5), (106.5, 19.0), (109.0, 15.0), (109.0, 11.5), (105.0, 8.6),
    (103.0, 10.5), (100.0, 13.5), (99.5, 10.0), (101.0, 6.5), (103.5, 1.5),
    (101.0, 3.0), (98.5, 8.0), (98.0, 16.0), (94.5, 16.5), (92.0, 21.5),
    (90.0, 22.0), (87.0, 21.5), (80.5, 16.0), (80.0, 10.0), (77.5, 8.0),
    (76.0, 10.5), (73.0, 17.0), (72.5, 21.0), (68.5, 23.5), (66.5, 25.5),
    (57.0, 25.7), (56.0, 27.0), (50.5, 30.0), (48.0, 30.0), (50.0, 26.5),
    (51.5, 24.0), (56.5, 26.0), (59.5, 22.5), (55.0, 17.0), (52.0, 15.5),
    (45.0, 13.0), (43.0, 13.0), (42.5, 16.0), (39.0, 21.5), (35.0, 28.0),
    (34.0, 31.0), (35.5, 36.0), (32.0, 36.5), (27.5, 37.0), (26.5, 40.0),
    (29.0, 41.0), (35.0, 42.0), (41.5, 41.5), (38.0, 44.5), (33.5, 44.5),
    (30.5, 46.5), (29.0, 44.5), (28.0, 42.0), (23.0, 40.5), (24.0, 38.0),
    (21.5, 37.0), (19.5, 40.5), (19.0, 42.0), (13.5, 45.5), (12.5, 44.0),
    (16.0, 41.5), (18.5, 40.2), (16.5, 38.0), (15.5, 40.0), (11.0, 42.5),
    (8.5, 44.4), (3.5, 43.5), (0.0, 40.0), (-0.5, 38.0), (-2.0, 36.7),
    (-5.5, 36.0), (-7.5, 37.0), (-9.5, 37.0),
];

// Eastern tip of Siberia, west of the dateline
const CHUKOTKA: Outline = &[
    (-180.0, 69.0), (-174.0, 67.0), (-170.0, 66.0), (-173.0, 64.5), (-180.0, 65.0),
];

const AUSTRALIA: Outline = &[
    (114.0, -22.0), (114.0, -26.0), (115.0, -33.5), (118.0, -35.0), (124.0, -33.8),
    (129.0, -31.5), (135.0, -34.5), (138.0, -35.5), (140.0, -38.0), (146.0, -39.0),
    (150.0, -37.5), (153.0, -31.0), (153.0, -25.0), (149.0, -21.0), (145.5, -15.0),
    (142.5, -10.7), (141.5, -17.0), (136.5, -15.5), (136.5, -12.0), (131.0, -11.5),
    (129.5, -15.0), (125.0, -14.5), (122.0, -18.0), (114.0, -22.0),
];

const GREENLAND: Outline = &[
    (-73.0, 78.0), (-60.0, 82.0), (-30.0, 83.0), (-18.0, 80.0), (-20.0, 72.0),
    (-22.0, 70.0), (-32.0, 68.0), (-40.0, 65.0), (-43.0, 60.0), (-48.0, 61.0),
    (-52.0, 64.5), (-54.0, 69.0), (-56.0, 74.0), (-65.0, 76.0), (-73.0, 78.0),
];

const GREAT_BRITAIN: Outline = &[
    (-5.5, 50.0), (1.5, 51.0), (1.5, 53.0), (-0.5, 54.5), (-2.0, 56.0),
    (-1.8, 57.6), (-4.0, 58.6), (-6.0, 58.0), (-5.5, 56.0), (-5.0, 54.7),
    (-3.0, 53.8), (-4.5, 52.8), (-5.0, 51.7), (-5.5, 50.0),
];

const ICELAND: Outline = &[
    (-24.0, 65.5), (-22.0, 66.5), (-15.0, 66.5), (-13.5, 65.0), (-18.0, 63.4),
    (-22.5, 63.8), (-24.0, 65.5),
];

const HONSHU: Outline = &[
    (130.0, 31.5), (131.5, 34.0), (135.0, 33.5), (140.0, 35.0), (141.0, 38.5),
    (141.5, 41.5), (140.0, 41.0), (140.0, 38.0), (137.0, 37.0), (133.0, 35.5),
    (130.0, 33.5), (130.0, 31.5),
];

const HOKKAIDO: Outline = &[
    (140.0, 42.0), (141.5, 45.5), (145.5, 43.5), (143.5, 42.0), (140.0, 42.0),
];

const BORNEO: Outline = &[
    (109.0, 1.5), (110.0, -3.0), (114.5, -4.0), (116.5, -2.0), (119.0, 5.0),
    (117.0, 7.0), (113.0, 3.0), (109.0, 1.5),
];

const SUMATRA: Outline = &[
    (95.3, 5.5), (98.0, 4.0), (104.0, -1.0), (106.0, -5.8), (104.5, -5.8),
    (101.0, -2.5), (95.3, 5.5),
];

const NEW_GUINEA: Outline = &[
    (131.0, -1.0), (138.0, -1.5), (146.0, -5.0), (150.5, -10.5), (143.0, -9.0),
    (138.5, -8.0), (137.5, -5.0), (132.0, -3.0), (131.0, -1.0),
];

const MADAGASCAR: Outline = &[
    (44.0, -25.0), (47.0, -25.0), (50.5, -15.5), (49.5, -12.0), (44.0, -16.5),
    (44.0, -25.0),
];

const NEW_ZEALAND_NORTH: Outline = &[
    (172.7, -34.5), (178.5, -37.7), (177.0, -39.5), (174.5, -41.5), (173.5, -39.0),
    (172.7, -34.5),
];

const NEW_ZEALAND_SOUTH: Outline = &[
    (166.5, -46.0), (172.5, -40.5), (174.5, -41.5), (171.0, -44.0), (169.0, -46.5),
    (166.5, -46.0),
];

const CUBA: Outline = &[
    (-85.0, 21.8), (-80.0, 23.2), (-74.2, 20.2), (-77.5, 19.8), (-81.0, 21.6),
    (-85.0, 21.8),
];

const OUTLINES: &[Outline] = &[
    NORTH_AMERICA,
    SOUTH_AMERICA,
    AFRICA,
    EURASIA,
    CHUKOTKA,
    AUSTRALIA,
    GREENLAND,
    GREAT_BRITAIN,
    ICELAND,
    HONSHU,
    HOKKAIDO,
    BORNEO,
    SUMATRA,
    NEW_GUINEA,
    MADAGASCAR,
    NEW_ZEALAND_NORTH,
    NEW_ZEALAND_SOUTH,
    CUBA,
];

/// All built-in coastline polylines
pub fn coastlines() -> impl Iterator<Item = &'static [(f64, f64)]> {
    OUTLINES.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outlines_are_valid_coordinates() {
        for outline in coastlines() {
            assert!(outline.len() >= 2);
            for &(lon, lat) in outline {
                assert!((-180.0..=180.0).contains(&lon), "bad lon {}", lon);
                assert!((-90.0..=90.0).contains(&lat), "bad lat {}", lat);
            }
        }
    }

    #[test]
    fn test_continents_are_closed() {
        for outline in [NORTH_AMERICA, SOUTH_AMERICA, AFRICA, EURASIA, AUSTRALIA] {
            assert_eq!(outline.first(), outline.last());
        }
    }
}
