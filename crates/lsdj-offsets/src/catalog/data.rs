//! Offset layouts of every known release.
//!
//! Rows are keyed by the XXH32 of the first ROM bank and listed in release
//! order. Several builds share one layout, so rows point into
//! [`OFFSET_GROUPS`] by index.

use super::CatalogEntry;
use crate::offset::OffsetDesc;
use crate::rom::SemVer;

pub static OFFSET_GROUPS: [OffsetDesc; 63] = [
    OffsetDesc::new(724, 915, 923, 927, 492, 493),
    OffsetDesc::new(723, 914, 922, 926, 492, 493),
    OffsetDesc::new(722, 913, 921, 925, 491, 492),
    OffsetDesc::new(789, 980, 988, 992, 558, 559),
    OffsetDesc::new(722, 913, 921, 925, 491, 492),
    OffsetDesc::new(468, 659, 667, 671, 237, 238),
    OffsetDesc::new(466, 657, 665, 669, 235, 236),
    OffsetDesc::new(461, 652, 660, 664, 232, 233),
    OffsetDesc::new(528, 719, 727, 731, 299, 300),
    OffsetDesc::new(461, 652, 660, 664, 232, 233),
    OffsetDesc::new(462, 653, 661, 665, 233, 234),
    OffsetDesc::new(531, 722, 730, 734, 302, 303),
    OffsetDesc::new(462, 653, 661, 665, 233, 234),
    OffsetDesc::new(232, 364, 380, 512, 859, 860),
    OffsetDesc::new(232, 364, 380, 512, 867, 868),
    OffsetDesc::new(232, 364, 380, 512, 879, 880),
    OffsetDesc::new(232, 364, 380, 512, 890, 891),
    OffsetDesc::new(232, 364, 380, 512, 882, 883),
    OffsetDesc::new(232, 364, 380, 512, 893, 894),
    OffsetDesc::new(232, 364, 380, 512, 962, 963),
    OffsetDesc::new(232, 364, 380, 512, 893, 894),
    OffsetDesc::new(232, 364, 380, 512, 899, 900),
    OffsetDesc::new(232, 364, 380, 512, 901, 902),
    OffsetDesc::new(232, 364, 380, 512, 907, 908),
    OffsetDesc::new(232, 364, 380, 512, 976, 977),
    OffsetDesc::new(232, 364, 380, 512, 907, 908),
    OffsetDesc::new(232, 364, 380, 512, 976, 977),
    OffsetDesc::new(232, 364, 380, 512, 907, 908),
    OffsetDesc::new(232, 364, 380, 512, 906, 907),
    OffsetDesc::new(232, 364, 380, 512, 969, 970),
    OffsetDesc::new(232, 364, 380, 512, 900, 901),
    OffsetDesc::new(232, 364, 380, 512, 899, 900),
    OffsetDesc::new(232, 364, 380, 512, 884, 885),
    OffsetDesc::new(232, 364, 380, 512, 887, 888),
    OffsetDesc::new(232, 364, 380, 512, 955, 956),
    OffsetDesc::new(232, 364, 380, 512, 887, 888),
    OffsetDesc::new(232, 364, 380, 512, 955, 956),
    OffsetDesc::new(232, 364, 380, 512, 887, 888),
    OffsetDesc::new(232, 364, 380, 512, 955, 956),
    OffsetDesc::new(232, 364, 380, 512, 887, 888),
    OffsetDesc::new(232, 364, 380, 512, 894, 895),
    OffsetDesc::new(232, 364, 380, 512, 892, 893),
    OffsetDesc::new(232, 364, 380, 512, 891, 892),
    OffsetDesc::new(232, 364, 380, 512, 900, 901),
    OffsetDesc::new(224, 364, 380, 512, 900, 901),
    OffsetDesc::new(224, 364, 380, 512, 901, 902),
    OffsetDesc::new(224, 364, 380, 512, 900, 901),
    OffsetDesc::new(224, 364, 380, 512, 897, 898),
    OffsetDesc::new(224, 364, 380, 512, 898, 899),
    OffsetDesc::new(224, 364, 380, 512, 895, 896),
    OffsetDesc::new(224, 364, 380, 512, 919, 920),
    OffsetDesc::new(224, 364, 380, 512, 1043, 1044),
    OffsetDesc::new(224, 364, 380, 512, 1046, 1047),
    OffsetDesc::new(224, 364, 380, 512, 1050, 1051),
    OffsetDesc::new(224, 364, 380, 512, 1051, 1052),
    OffsetDesc::new(224, 364, 380, 512, 1050, 1051),
    OffsetDesc::new(224, 364, 380, 512, 1051, 1052),
    OffsetDesc::new(224, 364, 380, 512, 1052, 1053),
    OffsetDesc::new(224, 364, 380, 512, 1051, 1052),
    OffsetDesc::new(224, 364, 380, 512, 1056, 1057),
    OffsetDesc::new(224, 364, 380, 512, 1124, 1125),
    OffsetDesc::new(224, 364, 380, 512, 1056, 1057),
    OffsetDesc::new(224, 364, 380, 512, 1054, 1055),
];

pub static CATALOG: [CatalogEntry; 430] = [
    CatalogEntry::new(39296686, SemVer::new(4, 0, 0), 0, ""),
    CatalogEntry::new(2059020996, SemVer::new(4, 0, 1), 0, ""),
    CatalogEntry::new(2638915703, SemVer::new(4, 0, 2), 0, ""),
    CatalogEntry::new(538935, SemVer::new(4, 0, 3), 0, ""),
    CatalogEntry::new(1984007071, SemVer::new(4, 0, 4), 0, "stable"),
    CatalogEntry::new(2022126599, SemVer::new(4, 0, 5), 1, ""),
    CatalogEntry::new(2944119784, SemVer::new(4, 0, 6), 1, ""),
    CatalogEntry::new(2579031444, SemVer::new(4, 0, 7), 1, ""),
    CatalogEntry::new(4189990103, SemVer::new(4, 0, 8), 2, ""),
    CatalogEntry::new(688256112, SemVer::new(4, 1, 0), 3, "arduinoboy"),
    CatalogEntry::new(3959562744, SemVer::new(4, 1, 0), 4, "stable"),
    CatalogEntry::new(1950382289, SemVer::new(4, 2, 1), 5, ""),
    CatalogEntry::new(1958441858, SemVer::new(4, 2, 4), 5, ""),
    CatalogEntry::new(1232046375, SemVer::new(4, 2, 5), 5, ""),
    CatalogEntry::new(2216944496, SemVer::new(4, 2, 6), 5, ""),
    CatalogEntry::new(3626773062, SemVer::new(4, 2, 7), 5, ""),
    CatalogEntry::new(887685837, SemVer::new(4, 2, 8), 5, ""),
    CatalogEntry::new(2582777469, SemVer::new(4, 2, 9), 5, ""),
    CatalogEntry::new(84555853, SemVer::new(4, 3, 0), 5, "stable"),
    CatalogEntry::new(3196402771, SemVer::new(4, 3, 1), 5, ""),
    CatalogEntry::new(108717199, SemVer::new(4, 3, 2), 5, ""),
    CatalogEntry::new(4262420365, SemVer::new(4, 3, 3), 6, ""),
    CatalogEntry::new(2998307246, SemVer::new(4, 3, 4), 6, ""),
    CatalogEntry::new(1046392657, SemVer::new(4, 3, 5), 6, ""),
    CatalogEntry::new(664811206, SemVer::new(4, 3, 6), 6, ""),
    CatalogEntry::new(3272789640, SemVer::new(4, 3, 7), 6, ""),
    CatalogEntry::new(736689752, SemVer::new(4, 3, 8), 6, ""),
    CatalogEntry::new(3390399744, SemVer::new(4, 3, 8), 6, ""),
    CatalogEntry::new(2716551436, SemVer::new(4, 4, 0), 6, "stable"),
    CatalogEntry::new(3053776015, SemVer::new(4, 4, 3), 6, ""),
    CatalogEntry::new(2645371428, SemVer::new(4, 4, 9), 7, ""),
    CatalogEntry::new(2385103784, SemVer::new(4, 5, 0), 7, ""),
    CatalogEntry::new(2723966608, SemVer::new(4, 5, 1), 7, ""),
    CatalogEntry::new(2429353599, SemVer::new(4, 5, 3), 7, ""),
    CatalogEntry::new(388846825, SemVer::new(4, 5, 4), 7, "stable"),
    CatalogEntry::new(1519526617, SemVer::new(4, 5, 5), 7, ""),
    CatalogEntry::new(943919719, SemVer::new(4, 5, 6), 7, ""),
    CatalogEntry::new(460419239, SemVer::new(4, 5, 7), 7, ""),
    CatalogEntry::new(83692492, SemVer::new(4, 5, 8), 7, ""),
    CatalogEntry::new(3972784090, SemVer::new(4, 5, 9), 7, ""),
    CatalogEntry::new(1948799539, SemVer::new(4, 6, 0), 7, "stable"),
    CatalogEntry::new(2019060452, SemVer::new(4, 6, 1), 7, ""),
    CatalogEntry::new(1630068441, SemVer::new(4, 6, 2), 7, "stable"),
    CatalogEntry::new(3406020554, SemVer::new(4, 6, 3), 7, ""),
    CatalogEntry::new(610824616, SemVer::new(4, 6, 4), 7, ""),
    CatalogEntry::new(1818706830, SemVer::new(4, 6, 5), 7, ""),
    CatalogEntry::new(2333872139, SemVer::new(4, 6, 6), 7, ""),
    CatalogEntry::new(2401390913, SemVer::new(4, 6, 7), 7, ""),
    CatalogEntry::new(3170340609, SemVer::new(4, 6, 8), 7, ""),
    CatalogEntry::new(1572498013, SemVer::new(4, 6, 9), 7, "stable"),
    CatalogEntry::new(995843178, SemVer::new(4, 7, 0), 7, ""),
    CatalogEntry::new(697798189, SemVer::new(4, 7, 2), 7, ""),
    CatalogEntry::new(209555959, SemVer::new(4, 7, 3), 8, "arduinoboy"),
    CatalogEntry::new(181131276, SemVer::new(4, 7, 3), 9, "stable"),
    CatalogEntry::new(1803864400, SemVer::new(4, 7, 4), 9, ""),
    CatalogEntry::new(725179447, SemVer::new(4, 7, 5), 9, ""),
    CatalogEntry::new(3669004823, SemVer::new(4, 8, 0), 10, "stable"),
    CatalogEntry::new(550345484, SemVer::new(4, 8, 1), 10, ""),
    CatalogEntry::new(903228375, SemVer::new(4, 8, 2), 10, ""),
    CatalogEntry::new(4258394291, SemVer::new(4, 8, 3), 10, ""),
    CatalogEntry::new(1927208215, SemVer::new(4, 8, 4), 10, ""),
    CatalogEntry::new(158912650, SemVer::new(4, 8, 5), 10, ""),
    CatalogEntry::new(706364741, SemVer::new(4, 8, 6), 10, ""),
    CatalogEntry::new(2105126070, SemVer::new(4, 8, 7), 10, ""),
    CatalogEntry::new(3797405943, SemVer::new(4, 8, 8), 11, "arduinoboy"),
    CatalogEntry::new(1564072429, SemVer::new(4, 8, 8), 12, ""),
    CatalogEntry::new(3143463926, SemVer::new(4, 8, 9), 12, ""),
    CatalogEntry::new(124251349, SemVer::new(4, 9, 0), 12, ""),
    CatalogEntry::new(2820205132, SemVer::new(4, 9, 1), 12, ""),
    CatalogEntry::new(3533602874, SemVer::new(4, 9, 2), 12, ""),
    CatalogEntry::new(3117007861, SemVer::new(4, 9, 3), 12, ""),
    CatalogEntry::new(2494111220, SemVer::new(4, 9, 4), 12, "goomba"),
    CatalogEntry::new(918683067, SemVer::new(4, 9, 4), 12, "stable"),
    CatalogEntry::new(1977007611, SemVer::new(4, 9, 5), 12, ""),
    CatalogEntry::new(2288041085, SemVer::new(4, 9, 6), 13, ""),
    CatalogEntry::new(1314215630, SemVer::new(4, 9, 7), 14, ""),
    CatalogEntry::new(749591699, SemVer::new(4, 9, 8), 14, ""),
    CatalogEntry::new(610539556, SemVer::new(4, 9, 9), 14, ""),
    CatalogEntry::new(1205724580, SemVer::new(5, 0, 0), 15, ""),
    CatalogEntry::new(4025522530, SemVer::new(5, 0, 1), 15, ""),
    CatalogEntry::new(3012862621, SemVer::new(5, 0, 2), 15, ""),
    CatalogEntry::new(1007349763, SemVer::new(5, 0, 3), 15, "stable"),
    CatalogEntry::new(3386968737, SemVer::new(5, 1, 0), 16, ""),
    CatalogEntry::new(3017151099, SemVer::new(5, 1, 1), 17, ""),
    CatalogEntry::new(3441786130, SemVer::new(5, 1, 2), 17, ""),
    CatalogEntry::new(241481822, SemVer::new(5, 1, 3), 17, ""),
    CatalogEntry::new(595777833, SemVer::new(5, 1, 4), 17, ""),
    CatalogEntry::new(3809410389, SemVer::new(5, 1, 5), 17, ""),
    CatalogEntry::new(478347039, SemVer::new(5, 1, 6), 17, ""),
    CatalogEntry::new(2633165547, SemVer::new(5, 1, 7), 17, ""),
    CatalogEntry::new(405349081, SemVer::new(5, 1, 8), 17, ""),
    CatalogEntry::new(520174013, SemVer::new(5, 1, 8), 17, ""),
    CatalogEntry::new(3333288295, SemVer::new(5, 2, 0), 17, ""),
    CatalogEntry::new(3535717925, SemVer::new(5, 2, 1), 17, ""),
    CatalogEntry::new(2572960100, SemVer::new(5, 2, 2), 17, ""),
    CatalogEntry::new(3821521277, SemVer::new(5, 2, 3), 17, ""),
    CatalogEntry::new(2954706488, SemVer::new(5, 2, 4), 17, ""),
    CatalogEntry::new(3161650456, SemVer::new(5, 2, 5), 18, ""),
    CatalogEntry::new(1478247915, SemVer::new(5, 2, 6), 18, ""),
    CatalogEntry::new(1809451499, SemVer::new(5, 2, 7), 18, ""),
    CatalogEntry::new(3495790725, SemVer::new(5, 2, 8), 18, ""),
    CatalogEntry::new(3236311661, SemVer::new(5, 2, 9), 18, ""),
    CatalogEntry::new(3860491040, SemVer::new(5, 3, 0), 18, ""),
    CatalogEntry::new(1054041234, SemVer::new(5, 3, 1), 18, ""),
    CatalogEntry::new(3319690365, SemVer::new(5, 3, 2), 18, ""),
    CatalogEntry::new(334255846, SemVer::new(5, 3, 3), 18, ""),
    CatalogEntry::new(3542357809, SemVer::new(5, 3, 4), 19, "arduinoboy"),
    CatalogEntry::new(1282750438, SemVer::new(5, 3, 4), 20, ""),
    CatalogEntry::new(2921731652, SemVer::new(5, 3, 5), 20, ""),
    CatalogEntry::new(1694601527, SemVer::new(5, 3, 6), 20, ""),
    CatalogEntry::new(1456481104, SemVer::new(5, 3, 7), 20, ""),
    CatalogEntry::new(436560336, SemVer::new(5, 3, 8), 20, ""),
    CatalogEntry::new(971872308, SemVer::new(5, 3, 9), 21, ""),
    CatalogEntry::new(3653401647, SemVer::new(5, 4, 0), 21, ""),
    CatalogEntry::new(2845522341, SemVer::new(5, 4, 1), 22, ""),
    CatalogEntry::new(1865322863, SemVer::new(5, 4, 2), 22, ""),
    CatalogEntry::new(2403169696, SemVer::new(5, 4, 3), 22, ""),
    CatalogEntry::new(905528789, SemVer::new(5, 4, 4), 22, ""),
    CatalogEntry::new(1536328810, SemVer::new(5, 4, 5), 22, ""),
    CatalogEntry::new(1627456997, SemVer::new(5, 4, 6), 22, ""),
    CatalogEntry::new(762833157, SemVer::new(5, 4, 7), 22, ""),
    CatalogEntry::new(3751162619, SemVer::new(5, 4, 8), 22, ""),
    CatalogEntry::new(390815300, SemVer::new(5, 4, 9), 22, ""),
    CatalogEntry::new(2439010233, SemVer::new(5, 5, 0), 22, ""),
    CatalogEntry::new(4172814710, SemVer::new(5, 5, 1), 22, ""),
    CatalogEntry::new(852066409, SemVer::new(5, 5, 2), 22, ""),
    CatalogEntry::new(4124073074, SemVer::new(5, 5, 3), 22, ""),
    CatalogEntry::new(2483396277, SemVer::new(5, 5, 4), 22, ""),
    CatalogEntry::new(285951192, SemVer::new(5, 5, 5), 22, ""),
    CatalogEntry::new(3804627680, SemVer::new(5, 5, 6), 22, ""),
    CatalogEntry::new(905193113, SemVer::new(5, 5, 7), 22, ""),
    CatalogEntry::new(1808638901, SemVer::new(5, 5, 8), 22, ""),
    CatalogEntry::new(1855666317, SemVer::new(5, 5, 9), 22, ""),
    CatalogEntry::new(2222423415, SemVer::new(5, 6, 0), 22, ""),
    CatalogEntry::new(2311886, SemVer::new(5, 6, 1), 22, ""),
    CatalogEntry::new(2373023443, SemVer::new(5, 6, 2), 22, ""),
    CatalogEntry::new(3620892307, SemVer::new(5, 6, 3), 22, ""),
    CatalogEntry::new(3606578429, SemVer::new(5, 6, 4), 22, ""),
    CatalogEntry::new(1290473849, SemVer::new(5, 6, 5), 22, ""),
    CatalogEntry::new(4065310794, SemVer::new(5, 7, 0), 23, ""),
    CatalogEntry::new(2787200037, SemVer::new(5, 7, 1), 23, ""),
    CatalogEntry::new(1604690905, SemVer::new(5, 7, 2), 23, ""),
    CatalogEntry::new(2544381527, SemVer::new(5, 7, 3), 23, ""),
    CatalogEntry::new(1371181006, SemVer::new(5, 7, 4), 23, ""),
    CatalogEntry::new(1136073671, SemVer::new(5, 7, 5), 23, ""),
    CatalogEntry::new(2805555324, SemVer::new(5, 7, 6), 23, ""),
    CatalogEntry::new(1316801502, SemVer::new(5, 7, 7), 23, ""),
    CatalogEntry::new(1235268420, SemVer::new(5, 7, 8), 24, "arduinoboy-untested"),
    CatalogEntry::new(6243999, SemVer::new(5, 7, 8), 25, "stable"),
    CatalogEntry::new(3655525793, SemVer::new(5, 8, 1), 25, ""),
    CatalogEntry::new(1003020052, SemVer::new(5, 8, 2), 25, ""),
    CatalogEntry::new(2763727461, SemVer::new(5, 8, 3), 25, ""),
    CatalogEntry::new(1243354196, SemVer::new(5, 8, 4), 25, ""),
    CatalogEntry::new(3747779846, SemVer::new(5, 8, 5), 25, ""),
    CatalogEntry::new(3680773124, SemVer::new(5, 8, 6), 25, ""),
    CatalogEntry::new(1885695272, SemVer::new(5, 8, 7), 25, ""),
    CatalogEntry::new(525322023, SemVer::new(5, 8, 8), 26, "arduinoboy-untested"),
    CatalogEntry::new(2314834860, SemVer::new(5, 8, 8), 27, "stable"),
    CatalogEntry::new(3822008679, SemVer::new(5, 8, 9), 27, ""),
    CatalogEntry::new(325287058, SemVer::new(5, 9, 0), 27, ""),
    CatalogEntry::new(1510371123, SemVer::new(5, 9, 1), 27, ""),
    CatalogEntry::new(3899827417, SemVer::new(5, 9, 2), 27, ""),
    CatalogEntry::new(2177379632, SemVer::new(5, 9, 3), 27, ""),
    CatalogEntry::new(3983570745, SemVer::new(5, 9, 4), 27, ""),
    CatalogEntry::new(1533368742, SemVer::new(5, 9, 5), 27, ""),
    CatalogEntry::new(870139031, SemVer::new(5, 9, 6), 27, ""),
    CatalogEntry::new(3551474807, SemVer::new(5, 9, 7), 27, ""),
    CatalogEntry::new(3482383440, SemVer::new(5, 9, 8), 28, ""),
    CatalogEntry::new(1613663085, SemVer::new(5, 9, 9), 29, "arduinoboy"),
    CatalogEntry::new(155227470, SemVer::new(5, 9, 9), 30, "stable"),
    CatalogEntry::new(2182303442, SemVer::new(6, 0, 0), 30, ""),
    CatalogEntry::new(3659045881, SemVer::new(6, 0, 1), 30, "stable"),
    CatalogEntry::new(1604594231, SemVer::new(6, 0, 2), 30, ""),
    CatalogEntry::new(3813667656, SemVer::new(6, 0, 3), 30, ""),
    CatalogEntry::new(3059164471, SemVer::new(6, 0, 4), 30, ""),
    CatalogEntry::new(3845675453, SemVer::new(6, 0, 5), 30, ""),
    CatalogEntry::new(3041122975, SemVer::new(6, 0, 6), 30, ""),
    CatalogEntry::new(1916545498, SemVer::new(6, 0, 7), 30, ""),
    CatalogEntry::new(3952745460, SemVer::new(6, 0, 8), 30, "send-notes-in-off"),
    CatalogEntry::new(973723366, SemVer::new(6, 0, 8), 30, ""),
    CatalogEntry::new(2159835984, SemVer::new(6, 0, 9), 30, ""),
    CatalogEntry::new(2539137332, SemVer::new(6, 1, 0), 30, ""),
    CatalogEntry::new(3110087533, SemVer::new(6, 1, 1), 30, ""),
    CatalogEntry::new(1152477476, SemVer::new(6, 1, 2), 30, ""),
    CatalogEntry::new(1172033225, SemVer::new(6, 1, 3), 30, ""),
    CatalogEntry::new(506594297, SemVer::new(6, 1, 4), 31, ""),
    CatalogEntry::new(2679919351, SemVer::new(6, 1, 5), 31, ""),
    CatalogEntry::new(2195077021, SemVer::new(6, 1, 6), 31, ""),
    CatalogEntry::new(1941329111, SemVer::new(6, 1, 7), 31, ""),
    CatalogEntry::new(4023035233, SemVer::new(6, 1, 8), 31, ""),
    CatalogEntry::new(3255371185, SemVer::new(6, 1, 9), 31, ""),
    CatalogEntry::new(2016000901, SemVer::new(6, 2, 0), 31, ""),
    CatalogEntry::new(963034004, SemVer::new(6, 3, 0), 31, ""),
    CatalogEntry::new(1996478921, SemVer::new(6, 3, 1), 31, ""),
    CatalogEntry::new(348833419, SemVer::new(6, 3, 2), 31, ""),
    CatalogEntry::new(4449154, SemVer::new(6, 3, 3), 32, ""),
    CatalogEntry::new(2768972616, SemVer::new(6, 3, 4), 32, ""),
    CatalogEntry::new(475913188, SemVer::new(6, 3, 5), 32, ""),
    CatalogEntry::new(3337410515, SemVer::new(6, 3, 6), 32, ""),
    CatalogEntry::new(1830902959, SemVer::new(6, 3, 7), 32, ""),
    CatalogEntry::new(2952738886, SemVer::new(6, 3, 8), 32, ""),
    CatalogEntry::new(474275620, SemVer::new(6, 3, 9), 32, ""),
    CatalogEntry::new(5860951, SemVer::new(6, 4, 0), 32, ""),
    CatalogEntry::new(2084061444, SemVer::new(6, 4, 1), 32, ""),
    CatalogEntry::new(642140223, SemVer::new(6, 4, 2), 32, ""),
    CatalogEntry::new(1967801952, SemVer::new(6, 4, 3), 32, "serial-send-i"),
    CatalogEntry::new(1671641188, SemVer::new(6, 4, 3), 32, ""),
    CatalogEntry::new(3237063936, SemVer::new(6, 4, 4), 32, ""),
    CatalogEntry::new(3392516443, SemVer::new(6, 4, 5), 32, "stable"),
    CatalogEntry::new(3261672541, SemVer::new(6, 4, 5), 32, ""),
    CatalogEntry::new(2600314736, SemVer::new(6, 4, 9), 33, ""),
    CatalogEntry::new(2108463009, SemVer::new(6, 5, 0), 33, ""),
    CatalogEntry::new(4114352118, SemVer::new(6, 5, 1), 33, ""),
    CatalogEntry::new(4234250371, SemVer::new(6, 6, 0), 33, ""),
    CatalogEntry::new(782155833, SemVer::new(6, 6, 1), 33, ""),
    CatalogEntry::new(1263570315, SemVer::new(6, 6, 2), 33, ""),
    CatalogEntry::new(2114010035, SemVer::new(6, 6, 3), 33, ""),
    CatalogEntry::new(2990579072, SemVer::new(6, 6, 4), 33, ""),
    CatalogEntry::new(3154607343, SemVer::new(6, 6, 5), 33, ""),
    CatalogEntry::new(3662778811, SemVer::new(6, 6, 6), 33, ""),
    CatalogEntry::new(1137785681, SemVer::new(6, 6, 7), 33, ""),
    CatalogEntry::new(2105797404, SemVer::new(6, 6, 8), 33, ""),
    CatalogEntry::new(2239494406, SemVer::new(6, 8, 0), 33, ""),
    CatalogEntry::new(632980823, SemVer::new(6, 8, 1), 33, ""),
    CatalogEntry::new(632966096, SemVer::new(6, 8, 2), 33, "stable"),
    CatalogEntry::new(1480450992, SemVer::new(6, 8, 3), 33, ""),
    CatalogEntry::new(1144846915, SemVer::new(6, 8, 4), 33, ""),
    CatalogEntry::new(3518652119, SemVer::new(6, 8, 5), 34, "arduinoboy"),
    CatalogEntry::new(1028379768, SemVer::new(6, 8, 5), 35, ""),
    CatalogEntry::new(166619133, SemVer::new(6, 8, 6), 36, "arduinoboy"),
    CatalogEntry::new(1872142788, SemVer::new(6, 8, 6), 37, ""),
    CatalogEntry::new(2608385697, SemVer::new(6, 8, 7), 37, ""),
    CatalogEntry::new(2901872813, SemVer::new(6, 8, 8), 37, ""),
    CatalogEntry::new(2407936052, SemVer::new(6, 9, 0), 38, "arduinoboy"),
    CatalogEntry::new(1290926105, SemVer::new(6, 9, 0), 39, ""),
    CatalogEntry::new(2268008317, SemVer::new(7, 0, 0), 39, ""),
    CatalogEntry::new(823063395, SemVer::new(7, 0, 1), 39, ""),
    CatalogEntry::new(3622784947, SemVer::new(7, 0, 2), 39, ""),
    CatalogEntry::new(1713271519, SemVer::new(7, 0, 2), 39, ""),
    CatalogEntry::new(643709424, SemVer::new(7, 0, 4), 39, ""),
    CatalogEntry::new(2654681112, SemVer::new(7, 0, 5), 39, ""),
    CatalogEntry::new(298727574, SemVer::new(7, 0, 6), 39, ""),
    CatalogEntry::new(4086493903, SemVer::new(7, 0, 7), 39, ""),
    CatalogEntry::new(2976171729, SemVer::new(7, 0, 8), 39, ""),
    CatalogEntry::new(3473270526, SemVer::new(7, 1, 0), 39, ""),
    CatalogEntry::new(2985942800, SemVer::new(7, 1, 1), 39, ""),
    CatalogEntry::new(2214361665, SemVer::new(7, 1, 2), 39, ""),
    CatalogEntry::new(2847201065, SemVer::new(7, 1, 3), 39, ""),
    CatalogEntry::new(2154813566, SemVer::new(7, 1, 4), 39, ""),
    CatalogEntry::new(3751037464, SemVer::new(7, 1, 5), 39, ""),
    CatalogEntry::new(2741495508, SemVer::new(7, 1, 6), 39, ""),
    CatalogEntry::new(3869155582, SemVer::new(7, 1, 7), 39, ""),
    CatalogEntry::new(476565157, SemVer::new(7, 1, 8), 39, ""),
    CatalogEntry::new(3531124890, SemVer::new(7, 1, 9), 39, ""),
    CatalogEntry::new(3637670064, SemVer::new(7, 2, 0), 39, ""),
    CatalogEntry::new(878071470, SemVer::new(7, 2, 1), 39, ""),
    CatalogEntry::new(992888127, SemVer::new(7, 2, 2), 39, ""),
    CatalogEntry::new(2098171474, SemVer::new(7, 2, 3), 39, ""),
    CatalogEntry::new(2571187584, SemVer::new(7, 2, 4), 39, ""),
    CatalogEntry::new(1432439373, SemVer::new(7, 2, 5), 39, ""),
    CatalogEntry::new(3251297332, SemVer::new(7, 2, 6), 39, ""),
    CatalogEntry::new(687227468, SemVer::new(7, 2, 7), 39, ""),
    CatalogEntry::new(2332452005, SemVer::new(7, 2, 8), 39, ""),
    CatalogEntry::new(3375470170, SemVer::new(7, 2, 9), 39, ""),
    CatalogEntry::new(1587173377, SemVer::new(7, 3, 0), 39, ""),
    CatalogEntry::new(2345161968, SemVer::new(7, 3, 1), 39, ""),
    CatalogEntry::new(3796544274, SemVer::new(7, 3, 2), 39, ""),
    CatalogEntry::new(1793642926, SemVer::new(7, 3, 3), 39, ""),
    CatalogEntry::new(1057233033, SemVer::new(7, 4, 0), 40, ""),
    CatalogEntry::new(3514920935, SemVer::new(7, 4, 1), 40, ""),
    CatalogEntry::new(3016745268, SemVer::new(7, 4, 2), 41, ""),
    CatalogEntry::new(667286258, SemVer::new(7, 4, 3), 42, ""),
    CatalogEntry::new(2917138068, SemVer::new(7, 4, 4), 42, ""),
    CatalogEntry::new(1876740143, SemVer::new(7, 4, 4), 42, ""),
    CatalogEntry::new(2736328043, SemVer::new(7, 5, 1), 42, ""),
    CatalogEntry::new(1624634227, SemVer::new(7, 5, 2), 42, ""),
    CatalogEntry::new(4069724275, SemVer::new(7, 5, 3), 42, ""),
    CatalogEntry::new(1897970720, SemVer::new(7, 5, 4), 42, ""),
    CatalogEntry::new(3614827108, SemVer::new(7, 5, 5), 43, ""),
    CatalogEntry::new(3933582835, SemVer::new(7, 5, 6), 43, ""),
    CatalogEntry::new(3400290142, SemVer::new(7, 5, 7), 43, ""),
    CatalogEntry::new(896212608, SemVer::new(7, 5, 8), 43, ""),
    CatalogEntry::new(1615407334, SemVer::new(7, 5, 9), 44, ""),
    CatalogEntry::new(2614338095, SemVer::new(7, 6, 0), 45, ""),
    CatalogEntry::new(821842784, SemVer::new(7, 6, 1), 46, ""),
    CatalogEntry::new(1663638946, SemVer::new(7, 6, 2), 47, ""),
    CatalogEntry::new(2560882250, SemVer::new(7, 6, 3), 47, ""),
    CatalogEntry::new(759094627, SemVer::new(7, 6, 4), 47, ""),
    CatalogEntry::new(1299418478, SemVer::new(7, 6, 5), 47, ""),
    CatalogEntry::new(3980399492, SemVer::new(7, 6, 6), 47, ""),
    CatalogEntry::new(2334287384, SemVer::new(7, 6, 7), 47, ""),
    CatalogEntry::new(1294762592, SemVer::new(7, 6, 8), 47, ""),
    CatalogEntry::new(1027589282, SemVer::new(7, 6, 9), 47, ""),
    CatalogEntry::new(4246675114, SemVer::new(7, 7, 0), 47, ""),
    CatalogEntry::new(359315047, SemVer::new(7, 7, 1), 47, ""),
    CatalogEntry::new(665729261, SemVer::new(7, 7, 2), 47, ""),
    CatalogEntry::new(570795461, SemVer::new(7, 7, 3), 47, ""),
    CatalogEntry::new(2453249279, SemVer::new(7, 7, 4), 47, ""),
    CatalogEntry::new(2519751597, SemVer::new(7, 7, 5), 47, ""),
    CatalogEntry::new(3456625766, SemVer::new(7, 7, 6), 47, ""),
    CatalogEntry::new(1610453906, SemVer::new(7, 7, 7), 47, ""),
    CatalogEntry::new(1141002876, SemVer::new(7, 7, 8), 47, ""),
    CatalogEntry::new(2078786867, SemVer::new(7, 7, 9), 47, ""),
    CatalogEntry::new(2452690866, SemVer::new(7, 8, 0), 47, ""),
    CatalogEntry::new(1496842040, SemVer::new(7, 8, 1), 47, ""),
    CatalogEntry::new(2993642707, SemVer::new(7, 8, 2), 47, ""),
    CatalogEntry::new(1010167477, SemVer::new(7, 8, 3), 47, ""),
    CatalogEntry::new(822044576, SemVer::new(7, 8, 4), 47, ""),
    CatalogEntry::new(871150613, SemVer::new(7, 8, 5), 47, ""),
    CatalogEntry::new(2315211703, SemVer::new(7, 8, 6), 47, ""),
    CatalogEntry::new(3444574301, SemVer::new(7, 8, 7), 47, ""),
    CatalogEntry::new(1089732217, SemVer::new(7, 8, 8), 47, ""),
    CatalogEntry::new(3028559132, SemVer::new(7, 8, 9), 47, ""),
    CatalogEntry::new(2338297284, SemVer::new(7, 9, 0), 47, ""),
    CatalogEntry::new(2124146138, SemVer::new(7, 9, 1), 48, ""),
    CatalogEntry::new(3174270079, SemVer::new(7, 9, 2), 49, ""),
    CatalogEntry::new(1166567353, SemVer::new(7, 9, 3), 49, ""),
    CatalogEntry::new(3097628208, SemVer::new(7, 9, 4), 49, ""),
    CatalogEntry::new(1608350382, SemVer::new(7, 9, 5), 49, ""),
    CatalogEntry::new(931661769, SemVer::new(7, 9, 6), 49, ""),
    CatalogEntry::new(51578483, SemVer::new(7, 9, 7), 49, ""),
    CatalogEntry::new(4293497990, SemVer::new(7, 9, 8), 49, ""),
    CatalogEntry::new(1906191210, SemVer::new(7, 9, 9), 49, ""),
    CatalogEntry::new(2365447925, SemVer::new(8, 0, 0), 49, ""),
    CatalogEntry::new(3754469461, SemVer::new(8, 0, 1), 49, ""),
    CatalogEntry::new(1398017248, SemVer::new(8, 1, 0), 49, ""),
    CatalogEntry::new(3645788937, SemVer::new(8, 1, 1), 49, ""),
    CatalogEntry::new(390200130, SemVer::new(8, 1, 2), 49, ""),
    CatalogEntry::new(421851576, SemVer::new(8, 1, 3), 49, ""),
    CatalogEntry::new(346243621, SemVer::new(8, 1, 4), 49, ""),
    CatalogEntry::new(1360339976, SemVer::new(8, 1, 5), 49, ""),
    CatalogEntry::new(4054829225, SemVer::new(8, 1, 6), 49, ""),
    CatalogEntry::new(2116663599, SemVer::new(8, 1, 7), 49, ""),
    CatalogEntry::new(316729465, SemVer::new(8, 1, 8), 49, ""),
    CatalogEntry::new(596542505, SemVer::new(8, 1, 9), 50, ""),
    CatalogEntry::new(3655984992, SemVer::new(8, 2, 0), 50, ""),
    CatalogEntry::new(1990670513, SemVer::new(8, 2, 1), 51, ""),
    CatalogEntry::new(4200197487, SemVer::new(8, 2, 2), 52, ""),
    CatalogEntry::new(1401211626, SemVer::new(8, 2, 3), 53, ""),
    CatalogEntry::new(516271883, SemVer::new(8, 2, 4), 53, ""),
    CatalogEntry::new(3278579259, SemVer::new(8, 2, 5), 53, ""),
    CatalogEntry::new(2739098733, SemVer::new(8, 2, 6), 53, ""),
    CatalogEntry::new(954920465, SemVer::new(8, 2, 7), 53, ""),
    CatalogEntry::new(1261160416, SemVer::new(8, 2, 8), 53, ""),
    CatalogEntry::new(373406070, SemVer::new(8, 2, 9), 53, ""),
    CatalogEntry::new(4093860710, SemVer::new(8, 3, 0), 53, ""),
    CatalogEntry::new(671525850, SemVer::new(8, 3, 1), 53, ""),
    CatalogEntry::new(659907922, SemVer::new(8, 3, 2), 53, ""),
    CatalogEntry::new(4244291994, SemVer::new(8, 3, 3), 53, ""),
    CatalogEntry::new(1491821160, SemVer::new(8, 3, 4), 53, ""),
    CatalogEntry::new(555647326, SemVer::new(8, 3, 5), 53, ""),
    CatalogEntry::new(371130489, SemVer::new(8, 3, 6), 53, ""),
    CatalogEntry::new(2848274780, SemVer::new(8, 3, 7), 53, ""),
    CatalogEntry::new(3191421837, SemVer::new(8, 3, 8), 53, ""),
    CatalogEntry::new(1233912831, SemVer::new(8, 3, 9), 53, ""),
    CatalogEntry::new(2593319323, SemVer::new(8, 4, 0), 53, ""),
    CatalogEntry::new(4256219480, SemVer::new(8, 4, 1), 53, ""),
    CatalogEntry::new(3832752736, SemVer::new(8, 4, 2), 53, ""),
    CatalogEntry::new(1495279254, SemVer::new(8, 4, 4), 53, ""),
    CatalogEntry::new(4096618398, SemVer::new(8, 4, 5), 53, ""),
    CatalogEntry::new(1090027336, SemVer::new(8, 4, 6), 53, ""),
    CatalogEntry::new(2462018828, SemVer::new(8, 4, 7), 53, ""),
    CatalogEntry::new(3588101684, SemVer::new(8, 4, 8), 53, ""),
    CatalogEntry::new(3205307263, SemVer::new(8, 4, 9), 53, ""),
    CatalogEntry::new(565810973, SemVer::new(8, 5, 0), 53, ""),
    CatalogEntry::new(103097418, SemVer::new(8, 5, 1), 53, "stable-candidate"),
    CatalogEntry::new(3954799564, SemVer::new(8, 6, 0), 53, ""),
    CatalogEntry::new(2467461470, SemVer::new(8, 6, 1), 53, ""),
    CatalogEntry::new(1211778499, SemVer::new(8, 6, 2), 53, ""),
    CatalogEntry::new(79034434, SemVer::new(8, 6, 3), 53, ""),
    CatalogEntry::new(1114454039, SemVer::new(8, 6, 4), 53, ""),
    CatalogEntry::new(3456048985, SemVer::new(8, 6, 5), 53, ""),
    CatalogEntry::new(2697705347, SemVer::new(8, 6, 6), 53, ""),
    CatalogEntry::new(3851574399, SemVer::new(8, 6, 7), 53, ""),
    CatalogEntry::new(3741126063, SemVer::new(8, 6, 8), 54, ""),
    CatalogEntry::new(2944267602, SemVer::new(8, 6, 9), 54, ""),
    CatalogEntry::new(2858820641, SemVer::new(8, 7, 0), 54, ""),
    CatalogEntry::new(798209154, SemVer::new(8, 7, 1), 54, ""),
    CatalogEntry::new(3834065561, SemVer::new(8, 7, 2), 54, ""),
    CatalogEntry::new(1479234534, SemVer::new(8, 7, 3), 54, ""),
    CatalogEntry::new(77374204, SemVer::new(8, 7, 4), 55, ""),
    CatalogEntry::new(1524178494, SemVer::new(8, 7, 5), 55, ""),
    CatalogEntry::new(3923000499, SemVer::new(8, 7, 6), 55, ""),
    CatalogEntry::new(3454781552, SemVer::new(8, 7, 7), 56, ""),
    CatalogEntry::new(1353968424, SemVer::new(8, 8, 0), 56, ""),
    CatalogEntry::new(2118034239, SemVer::new(8, 8, 1), 56, ""),
    CatalogEntry::new(1509076427, SemVer::new(8, 8, 2), 56, ""),
    CatalogEntry::new(2744446936, SemVer::new(8, 8, 3), 56, ""),
    CatalogEntry::new(4098754794, SemVer::new(8, 8, 4), 56, ""),
    CatalogEntry::new(3049195029, SemVer::new(8, 8, 5), 56, ""),
    CatalogEntry::new(4279111454, SemVer::new(8, 8, 6), 56, ""),
    CatalogEntry::new(980223932, SemVer::new(8, 8, 7), 56, ""),
    CatalogEntry::new(524870304, SemVer::new(8, 8, 8), 56, ""),
    CatalogEntry::new(3834190409, SemVer::new(8, 8, 9), 56, ""),
    CatalogEntry::new(2132659488, SemVer::new(8, 9, 0), 56, ""),
    CatalogEntry::new(87425250, SemVer::new(8, 9, 1), 56, ""),
    CatalogEntry::new(3741037828, SemVer::new(8, 9, 2), 56, ""),
    CatalogEntry::new(4099846163, SemVer::new(8, 9, 3), 56, ""),
    CatalogEntry::new(3522603779, SemVer::new(8, 9, 4), 56, ""),
    CatalogEntry::new(1336631363, SemVer::new(8, 9, 5), 57, ""),
    CatalogEntry::new(2690920620, SemVer::new(8, 9, 6), 57, ""),
    CatalogEntry::new(2163895253, SemVer::new(9, 0, 0), 57, ""),
    CatalogEntry::new(3802797961, SemVer::new(9, 0, 1), 58, "serial-send-instr"),
    CatalogEntry::new(3535380624, SemVer::new(9, 0, 1), 58, ""),
    CatalogEntry::new(1754387170, SemVer::new(9, 1, 0), 59, ""),
    CatalogEntry::new(866810166, SemVer::new(9, 1, 1), 59, ""),
    CatalogEntry::new(1815072274, SemVer::new(9, 1, 2), 59, ""),
    CatalogEntry::new(442054565, SemVer::new(9, 1, 3), 59, ""),
    CatalogEntry::new(1742601147, SemVer::new(9, 1, 4), 59, "test-alt-cgb-envs"),
    CatalogEntry::new(3222527884, SemVer::new(9, 1, 4), 59, ""),
    CatalogEntry::new(1178626673, SemVer::new(9, 1, 5), 59, ""),
    CatalogEntry::new(1325767163, SemVer::new(9, 1, 6), 59, ""),
    CatalogEntry::new(3152897338, SemVer::new(9, 1, 7), 59, ""),
    CatalogEntry::new(53283718, SemVer::new(9, 1, 8), 59, ""),
    CatalogEntry::new(1539732371, SemVer::new(9, 1, 9), 59, ""),
    CatalogEntry::new(1731080956, SemVer::new(9, 1, 10), 59, ""),
    CatalogEntry::new(171650318, SemVer::new(9, 1, 11), 59, ""),
    CatalogEntry::new(1398908547, SemVer::new(9, 1, 12), 60, "arduinoboy-untested"),
    CatalogEntry::new(1090576658, SemVer::new(9, 1, 12), 61, ""),
    CatalogEntry::new(2720898633, SemVer::new(9, 2, 0), 62, ""),
    CatalogEntry::new(1140514238, SemVer::new(9, 2, 1), 62, ""),
    CatalogEntry::new(3816710476, SemVer::new(9, 2, 2), 62, ""),
    CatalogEntry::new(3198552388, SemVer::new(9, 2, 3), 62, ""),
    CatalogEntry::new(1253677480, SemVer::new(9, 2, 4), 62, ""),
    CatalogEntry::new(1119492988, SemVer::new(9, 2, 5), 62, ""),
    CatalogEntry::new(510760574, SemVer::new(9, 2, 6), 62, ""),
    CatalogEntry::new(3772876596, SemVer::new(9, 2, 7), 62, ""),
    CatalogEntry::new(2921122598, SemVer::new(9, 2, 8), 62, ""),
    CatalogEntry::new(2260907489, SemVer::new(9, 2, 9), 62, ""),
    CatalogEntry::new(1249687980, SemVer::new(9, 2, 10), 62, ""),
];
