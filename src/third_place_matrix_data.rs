// Round of 32 third-place allocation table: one row per set of eight groups whose
// third-placed team advances, ordered by the four non-advancing groups. `opponents` lists
// the third-placed group facing the winners of groups A, B, D, E, G, I, K and L, in that
// order (see `SLOT_MATCHES`).
//
// Only rows 1..=PUBLISHED_ROWS are transcribed from FIFA's allocation table. The rest are
// derived: each honours the allowed-opponent sets but has not been checked against the
// published annex, and resolves as `MatrixSource::Derived`.

use crate::third_place_matrix::MatrixRow;

pub(crate) const COMBINATION_COUNT: usize = 495;
pub(crate) const PUBLISHED_ROWS: u16 = 9;

pub(crate) const COMBINATIONS: [MatrixRow; COMBINATION_COUNT] = [
    MatrixRow::new(1, "EFGHIJKL", "EJIFHGLK"),
    MatrixRow::new(2, "DFGHIJKL", "HGIDJFLK"),
    MatrixRow::new(3, "DEGHIJKL", "EJIDHGLK"),
    MatrixRow::new(4, "DEFHIJKL", "EJIDHFLK"),
    MatrixRow::new(5, "DEFGIJKL", "EGIDJFLK"),
    MatrixRow::new(6, "DEFGHJKL", "EGJDHFLK"),
    MatrixRow::new(7, "DEFGHIKL", "EGIDHFLK"),
    MatrixRow::new(8, "DEFGHIJL", "EGJDHFLI"),
    MatrixRow::new(9, "DEFGHIJK", "EGJDHFIK"),
    MatrixRow::new(10, "CFGHIJKL", "HGICJFLK"),
    MatrixRow::new(11, "CEGHIJKL", "EJICHGLK"),
    MatrixRow::new(12, "CEFHIJKL", "EJICHFLK"),
    MatrixRow::new(13, "CEFGIJKL", "EGICJFLK"),
    MatrixRow::new(14, "CEFGHJKL", "EGJCHFLK"),
    MatrixRow::new(15, "CEFGHIKL", "EGICHFLK"),
    MatrixRow::new(16, "CEFGHIJL", "EGJCHFLI"),
    MatrixRow::new(17, "CEFGHIJK", "EGJCHFIK"),
    MatrixRow::new(18, "CDGHIJKL", "CJIDHGLK"),
    MatrixRow::new(19, "CDFHIJKL", "CJIDHFLK"),
    MatrixRow::new(20, "CDFGIJKL", "CGIDJFLK"),
    MatrixRow::new(21, "CDFGHJKL", "CGJDHFLK"),
    MatrixRow::new(22, "CDFGHIKL", "CGIDHFLK"),
    MatrixRow::new(23, "CDFGHIJL", "CGJDHFLI"),
    MatrixRow::new(24, "CDFGHIJK", "CGJDHFIK"),
    MatrixRow::new(25, "CDEHIJKL", "EJIDHCLK"),
    MatrixRow::new(26, "CDEGIJKL", "CEIDJGLK"),
    MatrixRow::new(27, "CDEGHJKL", "CEJDHGLK"),
    MatrixRow::new(28, "CDEGHIKL", "CEIDHGLK"),
    MatrixRow::new(29, "CDEGHIJL", "CEJDHGLI"),
    MatrixRow::new(30, "CDEGHIJK", "CEJDHGIK"),
    MatrixRow::new(31, "CDEFIJKL", "CEIDJFLK"),
    MatrixRow::new(32, "CDEFHJKL", "CEJDHFLK"),
    MatrixRow::new(33, "CDEFHIKL", "CEIDHFLK"),
    MatrixRow::new(34, "CDEFHIJL", "CEJDHFLI"),
    MatrixRow::new(35, "CDEFHIJK", "CEJDHFIK"),
    MatrixRow::new(36, "CDEFGJKL", "CGJDEFLK"),
    MatrixRow::new(37, "CDEFGIKL", "CGIDEFLK"),
    MatrixRow::new(38, "CDEFGIJL", "CGJDEFLI"),
    MatrixRow::new(39, "CDEFGIJK", "CGJDEFIK"),
    MatrixRow::new(40, "CDEFGHKL", "CGEDHFLK"),
    MatrixRow::new(41, "CDEFGHJL", "CGJDHFLE"),
    MatrixRow::new(42, "CDEFGHJK", "CGEDHFJK"),
    MatrixRow::new(43, "CDEFGHIL", "CGEDHFLI"),
    MatrixRow::new(44, "CDEFGHIK", "CGEDHFIK"),
    MatrixRow::new(45, "CDEFGHIJ", "CGJDHFIE"),
    MatrixRow::new(46, "BFGHIJKL", "HGIBJFLK"),
    MatrixRow::new(47, "BEGHIJKL", "EJIBHGLK"),
    MatrixRow::new(48, "BEFHIJKL", "EJIBHFLK"),
    MatrixRow::new(49, "BEFGIJKL", "EGIBJFLK"),
    MatrixRow::new(50, "BEFGHJKL", "EGJBHFLK"),
    MatrixRow::new(51, "BEFGHIKL", "EGIBHFLK"),
    MatrixRow::new(52, "BEFGHIJL", "EGJBHFLI"),
    MatrixRow::new(53, "BEFGHIJK", "EGJBHFIK"),
    MatrixRow::new(54, "BDGHIJKL", "IJBDHGLK"),
    MatrixRow::new(55, "BDFHIJKL", "IJBDHFLK"),
    MatrixRow::new(56, "BDFGIJKL", "IGBDJFLK"),
    MatrixRow::new(57, "BDFGHJKL", "HGBDJFLK"),
    MatrixRow::new(58, "BDFGHIKL", "IGBDHFLK"),
    MatrixRow::new(59, "BDFGHIJL", "HGBDJFLI"),
    MatrixRow::new(60, "BDFGHIJK", "HGBDJFIK"),
    MatrixRow::new(61, "BDEHIJKL", "EJIBHDLK"),
    MatrixRow::new(62, "BDEGIJKL", "EJBDIGLK"),
    MatrixRow::new(63, "BDEGHJKL", "EJBDHGLK"),
    MatrixRow::new(64, "BDEGHIKL", "EIBDHGLK"),
    MatrixRow::new(65, "BDEGHIJL", "EJBDHGLI"),
    MatrixRow::new(66, "BDEGHIJK", "EJBDHGIK"),
    MatrixRow::new(67, "BDEFIJKL", "EJBDIFLK"),
    MatrixRow::new(68, "BDEFHJKL", "EJBDHFLK"),
    MatrixRow::new(69, "BDEFHIKL", "EIBDHFLK"),
    MatrixRow::new(70, "BDEFHIJL", "EJBDHFLI"),
    MatrixRow::new(71, "BDEFHIJK", "EJBDHFIK"),
    MatrixRow::new(72, "BDEFGJKL", "EGBDJFLK"),
    MatrixRow::new(73, "BDEFGIKL", "EGBDIFLK"),
    MatrixRow::new(74, "BDEFGIJL", "EGBDJFLI"),
    MatrixRow::new(75, "BDEFGIJK", "EGBDJFIK"),
    MatrixRow::new(76, "BDEFGHKL", "EGBDHFLK"),
    MatrixRow::new(77, "BDEFGHJL", "HGBDJFLE"),
    MatrixRow::new(78, "BDEFGHJK", "EGBDHFJK"),
    MatrixRow::new(79, "BDEFGHIL", "EGBDHFLI"),
    MatrixRow::new(80, "BDEFGHIK", "EGBDHFIK"),
    MatrixRow::new(81, "BDEFGHIJ", "HGBDJFIE"),
    MatrixRow::new(82, "BCGHIJKL", "CJIBHGLK"),
    MatrixRow::new(83, "BCFHIJKL", "CJIBHFLK"),
    MatrixRow::new(84, "BCFGIJKL", "CGIBJFLK"),
    MatrixRow::new(85, "BCFGHJKL", "HGBCJFLK"),
    MatrixRow::new(86, "BCFGHIKL", "CGIBHFLK"),
    MatrixRow::new(87, "BCFGHIJL", "HGBCJFLI"),
    MatrixRow::new(88, "BCFGHIJK", "HGBCJFIK"),
    MatrixRow::new(89, "BCEHIJKL", "EJIBHCLK"),
    MatrixRow::new(90, "BCEGIJKL", "CEIBJGLK"),
    MatrixRow::new(91, "BCEGHJKL", "EJBCHGLK"),
    MatrixRow::new(92, "BCEGHIKL", "CEIBHGLK"),
    MatrixRow::new(93, "BCEGHIJL", "EJBCHGLI"),
    MatrixRow::new(94, "BCEGHIJK", "EJBCHGIK"),
    MatrixRow::new(95, "BCEFIJKL", "CEIBJFLK"),
    MatrixRow::new(96, "BCEFHJKL", "EJBCHFLK"),
    MatrixRow::new(97, "BCEFHIKL", "CEIBHFLK"),
    MatrixRow::new(98, "BCEFHIJL", "EJBCHFLI"),
    MatrixRow::new(99, "BCEFHIJK", "EJBCHFIK"),
    MatrixRow::new(100, "BCEFGJKL", "EGBCJFLK"),
    MatrixRow::new(101, "BCEFGIKL", "CGIBEFLK"),
    MatrixRow::new(102, "BCEFGIJL", "EGBCJFLI"),
    MatrixRow::new(103, "BCEFGIJK", "EGBCJFIK"),
    MatrixRow::new(104, "BCEFGHKL", "EGBCHFLK"),
    MatrixRow::new(105, "BCEFGHJL", "HGBCJFLE"),
    MatrixRow::new(106, "BCEFGHJK", "EGBCHFJK"),
    MatrixRow::new(107, "BCEFGHIL", "EGBCHFLI"),
    MatrixRow::new(108, "BCEFGHIK", "EGBCHFIK"),
    MatrixRow::new(109, "BCEFGHIJ", "HGBCJFIE"),
    MatrixRow::new(110, "BCDHIJKL", "IJBDHCLK"),
    MatrixRow::new(111, "BCDGIJKL", "CJBDIGLK"),
    MatrixRow::new(112, "BCDGHJKL", "CJBDHGLK"),
    MatrixRow::new(113, "BCDGHIKL", "CIBDHGLK"),
    MatrixRow::new(114, "BCDGHIJL", "CJBDHGLI"),
    MatrixRow::new(115, "BCDGHIJK", "CJBDHGIK"),
    MatrixRow::new(116, "BCDFIJKL", "CJBDIFLK"),
    MatrixRow::new(117, "BCDFHJKL", "CJBDHFLK"),
    MatrixRow::new(118, "BCDFHIKL", "CIBDHFLK"),
    MatrixRow::new(119, "BCDFHIJL", "CJBDHFLI"),
    MatrixRow::new(120, "BCDFHIJK", "CJBDHFIK"),
    MatrixRow::new(121, "BCDFGJKL", "CGBDJFLK"),
    MatrixRow::new(122, "BCDFGIKL", "CGBDIFLK"),
    MatrixRow::new(123, "BCDFGIJL", "CGBDJFLI"),
    MatrixRow::new(124, "BCDFGIJK", "CGBDJFIK"),
    MatrixRow::new(125, "BCDFGHKL", "CGBDHFLK"),
    MatrixRow::new(126, "BCDFGHJL", "CGBDHFLJ"),
    MatrixRow::new(127, "BCDFGHJK", "CGBDHFJK"),
    MatrixRow::new(128, "BCDFGHIL", "CGBDHFLI"),
    MatrixRow::new(129, "BCDFGHIK", "CGBDHFIK"),
    MatrixRow::new(130, "BCDFGHIJ", "CGBDHFIJ"),
    MatrixRow::new(131, "BCDEIJKL", "EJBDICLK"),
    MatrixRow::new(132, "BCDEHJKL", "EJBDHCLK"),
    MatrixRow::new(133, "BCDEHIKL", "EIBDHCLK"),
    MatrixRow::new(134, "BCDEHIJL", "EJBDHCLI"),
    MatrixRow::new(135, "BCDEHIJK", "EJBDHCIK"),
    MatrixRow::new(136, "BCDEGJKL", "CEBDJGLK"),
    MatrixRow::new(137, "BCDEGIKL", "CEBDIGLK"),
    MatrixRow::new(138, "BCDEGIJL", "CEBDJGLI"),
    MatrixRow::new(139, "BCDEGIJK", "CEBDJGIK"),
    MatrixRow::new(140, "BCDEGHKL", "CEBDHGLK"),
    MatrixRow::new(141, "BCDEGHJL", "CJBDHGLE"),
    MatrixRow::new(142, "BCDEGHJK", "CEBDHGJK"),
    MatrixRow::new(143, "BCDEGHIL", "CEBDHGLI"),
    MatrixRow::new(144, "BCDEGHIK", "CEBDHGIK"),
    MatrixRow::new(145, "BCDEGHIJ", "CJBDHGIE"),
    MatrixRow::new(146, "BCDEFJKL", "CEBDJFLK"),
    MatrixRow::new(147, "BCDEFIKL", "CEBDIFLK"),
    MatrixRow::new(148, "BCDEFIJL", "CEBDJFLI"),
    MatrixRow::new(149, "BCDEFIJK", "CEBDJFIK"),
    MatrixRow::new(150, "BCDEFHKL", "CEBDHFLK"),
    MatrixRow::new(151, "BCDEFHJL", "CJBDHFLE"),
    MatrixRow::new(152, "BCDEFHJK", "CEBDHFJK"),
    MatrixRow::new(153, "BCDEFHIL", "CEBDHFLI"),
    MatrixRow::new(154, "BCDEFHIK", "CEBDHFIK"),
    MatrixRow::new(155, "BCDEFHIJ", "CJBDHFIE"),
    MatrixRow::new(156, "BCDEFGKL", "CGBDEFLK"),
    MatrixRow::new(157, "BCDEFGJL", "CGBDJFLE"),
    MatrixRow::new(158, "BCDEFGJK", "CGBDEFJK"),
    MatrixRow::new(159, "BCDEFGIL", "CGBDEFLI"),
    MatrixRow::new(160, "BCDEFGIK", "CGBDEFIK"),
    MatrixRow::new(161, "BCDEFGIJ", "CGBDJFIE"),
    MatrixRow::new(162, "BCDEFGHL", "CGBDHFLE"),
    MatrixRow::new(163, "BCDEFGHK", "EGBCHFDK"),
    MatrixRow::new(164, "BCDEFGHJ", "CGBDHFJE"),
    MatrixRow::new(165, "BCDEFGHI", "CGBDHFIE"),
    MatrixRow::new(166, "AFGHIJKL", "HGIAJFLK"),
    MatrixRow::new(167, "AEGHIJKL", "EJIAHGLK"),
    MatrixRow::new(168, "AEFHIJKL", "EJIAHFLK"),
    MatrixRow::new(169, "AEFGIJKL", "EGIAJFLK"),
    MatrixRow::new(170, "AEFGHJKL", "EGJAHFLK"),
    MatrixRow::new(171, "AEFGHIKL", "EGIAHFLK"),
    MatrixRow::new(172, "AEFGHIJL", "EGJAHFLI"),
    MatrixRow::new(173, "AEFGHIJK", "EGJAHFIK"),
    MatrixRow::new(174, "ADGHIJKL", "HJIDAGLK"),
    MatrixRow::new(175, "ADFHIJKL", "HJIDAFLK"),
    MatrixRow::new(176, "ADFGIJKL", "IGJDAFLK"),
    MatrixRow::new(177, "ADFGHJKL", "HGJDAFLK"),
    MatrixRow::new(178, "ADFGHIKL", "HGIDAFLK"),
    MatrixRow::new(179, "ADFGHIJL", "HGJDAFLI"),
    MatrixRow::new(180, "ADFGHIJK", "HGJDAFIK"),
    MatrixRow::new(181, "ADEHIJKL", "EJIAHDLK"),
    MatrixRow::new(182, "ADEGIJKL", "EJIDAGLK"),
    MatrixRow::new(183, "ADEGHJKL", "HEJDAGLK"),
    MatrixRow::new(184, "ADEGHIKL", "HEIDAGLK"),
    MatrixRow::new(185, "ADEGHIJL", "HEJDAGLI"),
    MatrixRow::new(186, "ADEGHIJK", "HEJDAGIK"),
    MatrixRow::new(187, "ADEFIJKL", "EJIDAFLK"),
    MatrixRow::new(188, "ADEFHJKL", "HEJDAFLK"),
    MatrixRow::new(189, "ADEFHIKL", "HEIDAFLK"),
    MatrixRow::new(190, "ADEFHIJL", "HEJDAFLI"),
    MatrixRow::new(191, "ADEFHIJK", "HEJDAFIK"),
    MatrixRow::new(192, "ADEFGJKL", "EGJDAFLK"),
    MatrixRow::new(193, "ADEFGIKL", "EGIDAFLK"),
    MatrixRow::new(194, "ADEFGIJL", "EGJDAFLI"),
    MatrixRow::new(195, "ADEFGIJK", "EGJDAFIK"),
    MatrixRow::new(196, "ADEFGHKL", "HGEDAFLK"),
    MatrixRow::new(197, "ADEFGHJL", "HGJDAFLE"),
    MatrixRow::new(198, "ADEFGHJK", "HGEDAFJK"),
    MatrixRow::new(199, "ADEFGHIL", "HGEDAFLI"),
    MatrixRow::new(200, "ADEFGHIK", "HGEDAFIK"),
    MatrixRow::new(201, "ADEFGHIJ", "HGJDAFIE"),
    MatrixRow::new(202, "ACGHIJKL", "CJIAHGLK"),
    MatrixRow::new(203, "ACFHIJKL", "CJIAHFLK"),
    MatrixRow::new(204, "ACFGIJKL", "CGIAJFLK"),
    MatrixRow::new(205, "ACFGHJKL", "CGJAHFLK"),
    MatrixRow::new(206, "ACFGHIKL", "CGIAHFLK"),
    MatrixRow::new(207, "ACFGHIJL", "CGJAHFLI"),
    MatrixRow::new(208, "ACFGHIJK", "CGJAHFIK"),
    MatrixRow::new(209, "ACEHIJKL", "EJIAHCLK"),
    MatrixRow::new(210, "ACEGIJKL", "EJICAGLK"),
    MatrixRow::new(211, "ACEGHJKL", "CEJAHGLK"),
    MatrixRow::new(212, "ACEGHIKL", "CEIAHGLK"),
    MatrixRow::new(213, "ACEGHIJL", "CEJAHGLI"),
    MatrixRow::new(214, "ACEGHIJK", "CEJAHGIK"),
    MatrixRow::new(215, "ACEFIJKL", "EJICAFLK"),
    MatrixRow::new(216, "ACEFHJKL", "CEJAHFLK"),
    MatrixRow::new(217, "ACEFHIKL", "CEIAHFLK"),
    MatrixRow::new(218, "ACEFHIJL", "CEJAHFLI"),
    MatrixRow::new(219, "ACEFHIJK", "CEJAHFIK"),
    MatrixRow::new(220, "ACEFGJKL", "EGJCAFLK"),
    MatrixRow::new(221, "ACEFGIKL", "EGICAFLK"),
    MatrixRow::new(222, "ACEFGIJL", "EGJCAFLI"),
    MatrixRow::new(223, "ACEFGIJK", "EGJCAFIK"),
    MatrixRow::new(224, "ACEFGHKL", "CGEAHFLK"),
    MatrixRow::new(225, "ACEFGHJL", "CGJAHFLE"),
    MatrixRow::new(226, "ACEFGHJK", "CGEAHFJK"),
    MatrixRow::new(227, "ACEFGHIL", "CGEAHFLI"),
    MatrixRow::new(228, "ACEFGHIK", "CGEAHFIK"),
    MatrixRow::new(229, "ACEFGHIJ", "CGJAHFIE"),
    MatrixRow::new(230, "ACDHIJKL", "HJIDACLK"),
    MatrixRow::new(231, "ACDGIJKL", "CJIDAGLK"),
    MatrixRow::new(232, "ACDGHJKL", "HGJDACLK"),
    MatrixRow::new(233, "ACDGHIKL", "HGIDACLK"),
    MatrixRow::new(234, "ACDGHIJL", "HGJDACLI"),
    MatrixRow::new(235, "ACDGHIJK", "HGJDACIK"),
    MatrixRow::new(236, "ACDFIJKL", "CJIDAFLK"),
    MatrixRow::new(237, "ACDFHJKL", "HFJDACLK"),
    MatrixRow::new(238, "ACDFHIKL", "HFIDACLK"),
    MatrixRow::new(239, "ACDFHIJL", "HFJDACLI"),
    MatrixRow::new(240, "ACDFHIJK", "HFJDACIK"),
    MatrixRow::new(241, "ACDFGJKL", "CGJDAFLK"),
    MatrixRow::new(242, "ACDFGIKL", "CGIDAFLK"),
    MatrixRow::new(243, "ACDFGIJL", "CGJDAFLI"),
    MatrixRow::new(244, "ACDFGIJK", "CGJDAFIK"),
    MatrixRow::new(245, "ACDFGHKL", "HGFDACLK"),
    MatrixRow::new(246, "ACDFGHJL", "HGFDACLJ"),
    MatrixRow::new(247, "ACDFGHJK", "HGFDACJK"),
    MatrixRow::new(248, "ACDFGHIL", "HGFDACLI"),
    MatrixRow::new(249, "ACDFGHIK", "HGFDACIK"),
    MatrixRow::new(250, "ACDFGHIJ", "HGFDACIJ"),
    MatrixRow::new(251, "ACDEIJKL", "EJIDACLK"),
    MatrixRow::new(252, "ACDEHJKL", "HEJDACLK"),
    MatrixRow::new(253, "ACDEHIKL", "HEIDACLK"),
    MatrixRow::new(254, "ACDEHIJL", "HEJDACLI"),
    MatrixRow::new(255, "ACDEHIJK", "HEJDACIK"),
    MatrixRow::new(256, "ACDEGJKL", "CEJDAGLK"),
    MatrixRow::new(257, "ACDEGIKL", "CEIDAGLK"),
    MatrixRow::new(258, "ACDEGIJL", "CEJDAGLI"),
    MatrixRow::new(259, "ACDEGIJK", "CEJDAGIK"),
    MatrixRow::new(260, "ACDEGHKL", "HGEDACLK"),
    MatrixRow::new(261, "ACDEGHJL", "HGJDACLE"),
    MatrixRow::new(262, "ACDEGHJK", "HGEDACJK"),
    MatrixRow::new(263, "ACDEGHIL", "HGEDACLI"),
    MatrixRow::new(264, "ACDEGHIK", "HGEDACIK"),
    MatrixRow::new(265, "ACDEGHIJ", "HGJDACIE"),
    MatrixRow::new(266, "ACDEFJKL", "CEJDAFLK"),
    MatrixRow::new(267, "ACDEFIKL", "CEIDAFLK"),
    MatrixRow::new(268, "ACDEFIJL", "CEJDAFLI"),
    MatrixRow::new(269, "ACDEFIJK", "CEJDAFIK"),
    MatrixRow::new(270, "ACDEFHKL", "HEFDACLK"),
    MatrixRow::new(271, "ACDEFHJL", "HFJDACLE"),
    MatrixRow::new(272, "ACDEFHJK", "HEFDACJK"),
    MatrixRow::new(273, "ACDEFHIL", "HEFDACLI"),
    MatrixRow::new(274, "ACDEFHIK", "HEFDACIK"),
    MatrixRow::new(275, "ACDEFHIJ", "HFJDACIE"),
    MatrixRow::new(276, "ACDEFGKL", "CGEDAFLK"),
    MatrixRow::new(277, "ACDEFGJL", "CGJDAFLE"),
    MatrixRow::new(278, "ACDEFGJK", "CGEDAFJK"),
    MatrixRow::new(279, "ACDEFGIL", "CGEDAFLI"),
    MatrixRow::new(280, "ACDEFGIK", "CGEDAFIK"),
    MatrixRow::new(281, "ACDEFGIJ", "CGJDAFIE"),
    MatrixRow::new(282, "ACDEFGHL", "HGFDACLE"),
    MatrixRow::new(283, "ACDEFGHK", "CGEAHFDK"),
    MatrixRow::new(284, "ACDEFGHJ", "HGFDACJE"),
    MatrixRow::new(285, "ACDEFGHI", "HGFDACIE"),
    MatrixRow::new(286, "ABGHIJKL", "HJIBAGLK"),
    MatrixRow::new(287, "ABFHIJKL", "HJIBAFLK"),
    MatrixRow::new(288, "ABFGIJKL", "IGBAJFLK"),
    MatrixRow::new(289, "ABFGHJKL", "HGBAJFLK"),
    MatrixRow::new(290, "ABFGHIKL", "HGIBAFLK"),
    MatrixRow::new(291, "ABFGHIJL", "HGBAJFLI"),
    MatrixRow::new(292, "ABFGHIJK", "HGBAJFIK"),
    MatrixRow::new(293, "ABEHIJKL", "EJIBAHLK"),
    MatrixRow::new(294, "ABEGIJKL", "EJIBAGLK"),
    MatrixRow::new(295, "ABEGHJKL", "EJBAHGLK"),
    MatrixRow::new(296, "ABEGHIKL", "HEIBAGLK"),
    MatrixRow::new(297, "ABEGHIJL", "EJBAHGLI"),
    MatrixRow::new(298, "ABEGHIJK", "EJBAHGIK"),
    MatrixRow::new(299, "ABEFIJKL", "EJIBAFLK"),
    MatrixRow::new(300, "ABEFHJKL", "EJBAHFLK"),
    MatrixRow::new(301, "ABEFHIKL", "HEIBAFLK"),
    MatrixRow::new(302, "ABEFHIJL", "EJBAHFLI"),
    MatrixRow::new(303, "ABEFHIJK", "EJBAHFIK"),
    MatrixRow::new(304, "ABEFGJKL", "EGBAJFLK"),
    MatrixRow::new(305, "ABEFGIKL", "EGIBAFLK"),
    MatrixRow::new(306, "ABEFGIJL", "EGBAJFLI"),
    MatrixRow::new(307, "ABEFGIJK", "EGBAJFIK"),
    MatrixRow::new(308, "ABEFGHKL", "EGBAHFLK"),
    MatrixRow::new(309, "ABEFGHJL", "HGBAJFLE"),
    MatrixRow::new(310, "ABEFGHJK", "EGBAHFJK"),
    MatrixRow::new(311, "ABEFGHIL", "EGBAHFLI"),
    MatrixRow::new(312, "ABEFGHIK", "EGBAHFIK"),
    MatrixRow::new(313, "ABEFGHIJ", "HGBAJFIE"),
    MatrixRow::new(314, "ABDHIJKL", "HJIBADLK"),
    MatrixRow::new(315, "ABDGIJKL", "IJBDAGLK"),
    MatrixRow::new(316, "ABDGHJKL", "HJBDAGLK"),
    MatrixRow::new(317, "ABDGHIKL", "HIBDAGLK"),
    MatrixRow::new(318, "ABDGHIJL", "HJBDAGLI"),
    MatrixRow::new(319, "ABDGHIJK", "HJBDAGIK"),
    MatrixRow::new(320, "ABDFIJKL", "IJBDAFLK"),
    MatrixRow::new(321, "ABDFHJKL", "HJBDAFLK"),
    MatrixRow::new(322, "ABDFHIKL", "HIBDAFLK"),
    MatrixRow::new(323, "ABDFHIJL", "HJBDAFLI"),
    MatrixRow::new(324, "ABDFHIJK", "HJBDAFIK"),
    MatrixRow::new(325, "ABDFGJKL", "FJBDAGLK"),
    MatrixRow::new(326, "ABDFGIKL", "IGBDAFLK"),
    MatrixRow::new(327, "ABDFGIJL", "FJBDAGLI"),
    MatrixRow::new(328, "ABDFGIJK", "FJBDAGIK"),
    MatrixRow::new(329, "ABDFGHKL", "HGBDAFLK"),
    MatrixRow::new(330, "ABDFGHJL", "HGBDAFLJ"),
    MatrixRow::new(331, "ABDFGHJK", "HGBDAFJK"),
    MatrixRow::new(332, "ABDFGHIL", "HGBDAFLI"),
    MatrixRow::new(333, "ABDFGHIK", "HGBDAFIK"),
    MatrixRow::new(334, "ABDFGHIJ", "HGBDAFIJ"),
    MatrixRow::new(335, "ABDEIJKL", "EJIBADLK"),
    MatrixRow::new(336, "ABDEHJKL", "EJBAHDLK"),
    MatrixRow::new(337, "ABDEHIKL", "HEIBADLK"),
    MatrixRow::new(338, "ABDEHIJL", "EJBAHDLI"),
    MatrixRow::new(339, "ABDEHIJK", "EJBAHDIK"),
    MatrixRow::new(340, "ABDEGJKL", "EJBDAGLK"),
    MatrixRow::new(341, "ABDEGIKL", "EIBDAGLK"),
    MatrixRow::new(342, "ABDEGIJL", "EJBDAGLI"),
    MatrixRow::new(343, "ABDEGIJK", "EJBDAGIK"),
    MatrixRow::new(344, "ABDEGHKL", "HEBDAGLK"),
    MatrixRow::new(345, "ABDEGHJL", "HJBDAGLE"),
    MatrixRow::new(346, "ABDEGHJK", "HEBDAGJK"),
    MatrixRow::new(347, "ABDEGHIL", "HEBDAGLI"),
    MatrixRow::new(348, "ABDEGHIK", "HEBDAGIK"),
    MatrixRow::new(349, "ABDEGHIJ", "HJBDAGIE"),
    MatrixRow::new(350, "ABDEFJKL", "EJBDAFLK"),
    MatrixRow::new(351, "ABDEFIKL", "EIBDAFLK"),
    MatrixRow::new(352, "ABDEFIJL", "EJBDAFLI"),
    MatrixRow::new(353, "ABDEFIJK", "EJBDAFIK"),
    MatrixRow::new(354, "ABDEFHKL", "HEBDAFLK"),
    MatrixRow::new(355, "ABDEFHJL", "HJBDAFLE"),
    MatrixRow::new(356, "ABDEFHJK", "HEBDAFJK"),
    MatrixRow::new(357, "ABDEFHIL", "HEBDAFLI"),
    MatrixRow::new(358, "ABDEFHIK", "HEBDAFIK"),
    MatrixRow::new(359, "ABDEFHIJ", "HJBDAFIE"),
    MatrixRow::new(360, "ABDEFGKL", "EGBDAFLK"),
    MatrixRow::new(361, "ABDEFGJL", "FJBDAGLE"),
    MatrixRow::new(362, "ABDEFGJK", "EGBDAFJK"),
    MatrixRow::new(363, "ABDEFGIL", "EGBDAFLI"),
    MatrixRow::new(364, "ABDEFGIK", "EGBDAFIK"),
    MatrixRow::new(365, "ABDEFGIJ", "FJBDAGIE"),
    MatrixRow::new(366, "ABDEFGHL", "HGBDAFLE"),
    MatrixRow::new(367, "ABDEFGHK", "EGBAHFDK"),
    MatrixRow::new(368, "ABDEFGHJ", "HGBDAFJE"),
    MatrixRow::new(369, "ABDEFGHI", "HGBDAFIE"),
    MatrixRow::new(370, "ABCHIJKL", "HJIBACLK"),
    MatrixRow::new(371, "ABCGIJKL", "CJIBAGLK"),
    MatrixRow::new(372, "ABCGHJKL", "CJBAHGLK"),
    MatrixRow::new(373, "ABCGHIKL", "CIBAHGLK"),
    MatrixRow::new(374, "ABCGHIJL", "CJBAHGLI"),
    MatrixRow::new(375, "ABCGHIJK", "CJBAHGIK"),
    MatrixRow::new(376, "ABCFIJKL", "CJIBAFLK"),
    MatrixRow::new(377, "ABCFHJKL", "CJBAHFLK"),
    MatrixRow::new(378, "ABCFHIKL", "CIBAHFLK"),
    MatrixRow::new(379, "ABCFHIJL", "CJBAHFLI"),
    MatrixRow::new(380, "ABCFHIJK", "CJBAHFIK"),
    MatrixRow::new(381, "ABCFGJKL", "CGBAJFLK"),
    MatrixRow::new(382, "ABCFGIKL", "CGIBAFLK"),
    MatrixRow::new(383, "ABCFGIJL", "CGBAJFLI"),
    MatrixRow::new(384, "ABCFGIJK", "CGBAJFIK"),
    MatrixRow::new(385, "ABCFGHKL", "CGBAHFLK"),
    MatrixRow::new(386, "ABCFGHJL", "CGBAHFLJ"),
    MatrixRow::new(387, "ABCFGHJK", "CGBAHFJK"),
    MatrixRow::new(388, "ABCFGHIL", "CGBAHFLI"),
    MatrixRow::new(389, "ABCFGHIK", "CGBAHFIK"),
    MatrixRow::new(390, "ABCFGHIJ", "CGBAHFIJ"),
    MatrixRow::new(391, "ABCEIJKL", "EJIBACLK"),
    MatrixRow::new(392, "ABCEHJKL", "EJBAHCLK"),
    MatrixRow::new(393, "ABCEHIKL", "HEIBACLK"),
    MatrixRow::new(394, "ABCEHIJL", "EJBAHCLI"),
    MatrixRow::new(395, "ABCEHIJK", "EJBAHCIK"),
    MatrixRow::new(396, "ABCEGJKL", "EJBCAGLK"),
    MatrixRow::new(397, "ABCEGIKL", "CEIBAGLK"),
    MatrixRow::new(398, "ABCEGIJL", "EJBCAGLI"),
    MatrixRow::new(399, "ABCEGIJK", "EJBCAGIK"),
    MatrixRow::new(400, "ABCEGHKL", "CEBAHGLK"),
    MatrixRow::new(401, "ABCEGHJL", "CJBAHGLE"),
    MatrixRow::new(402, "ABCEGHJK", "CEBAHGJK"),
    MatrixRow::new(403, "ABCEGHIL", "CEBAHGLI"),
    MatrixRow::new(404, "ABCEGHIK", "CEBAHGIK"),
    MatrixRow::new(405, "ABCEGHIJ", "CJBAHGIE"),
    MatrixRow::new(406, "ABCEFJKL", "EJBCAFLK"),
    MatrixRow::new(407, "ABCEFIKL", "CEIBAFLK"),
    MatrixRow::new(408, "ABCEFIJL", "EJBCAFLI"),
    MatrixRow::new(409, "ABCEFIJK", "EJBCAFIK"),
    MatrixRow::new(410, "ABCEFHKL", "CEBAHFLK"),
    MatrixRow::new(411, "ABCEFHJL", "CJBAHFLE"),
    MatrixRow::new(412, "ABCEFHJK", "CEBAHFJK"),
    MatrixRow::new(413, "ABCEFHIL", "CEBAHFLI"),
    MatrixRow::new(414, "ABCEFHIK", "CEBAHFIK"),
    MatrixRow::new(415, "ABCEFHIJ", "CJBAHFIE"),
    MatrixRow::new(416, "ABCEFGKL", "EGBCAFLK"),
    MatrixRow::new(417, "ABCEFGJL", "CGBAJFLE"),
    MatrixRow::new(418, "ABCEFGJK", "EGBCAFJK"),
    MatrixRow::new(419, "ABCEFGIL", "EGBCAFLI"),
    MatrixRow::new(420, "ABCEFGIK", "EGBCAFIK"),
    MatrixRow::new(421, "ABCEFGIJ", "CGBAJFIE"),
    MatrixRow::new(422, "ABCEFGHL", "CGBAHFLE"),
    MatrixRow::new(423, "ABCEFGHK", "CGBAHFEK"),
    MatrixRow::new(424, "ABCEFGHJ", "CGBAHFJE"),
    MatrixRow::new(425, "ABCEFGHI", "CGBAHFIE"),
    MatrixRow::new(426, "ABCDIJKL", "IJBDACLK"),
    MatrixRow::new(427, "ABCDHJKL", "HJBDACLK"),
    MatrixRow::new(428, "ABCDHIKL", "HIBDACLK"),
    MatrixRow::new(429, "ABCDHIJL", "HJBDACLI"),
    MatrixRow::new(430, "ABCDHIJK", "HJBDACIK"),
    MatrixRow::new(431, "ABCDGJKL", "CJBDAGLK"),
    MatrixRow::new(432, "ABCDGIKL", "CIBDAGLK"),
    MatrixRow::new(433, "ABCDGIJL", "CJBDAGLI"),
    MatrixRow::new(434, "ABCDGIJK", "CJBDAGIK"),
    MatrixRow::new(435, "ABCDGHKL", "HGBDACLK"),
    MatrixRow::new(436, "ABCDGHJL", "HGBDACLJ"),
    MatrixRow::new(437, "ABCDGHJK", "HGBDACJK"),
    MatrixRow::new(438, "ABCDGHIL", "HGBDACLI"),
    MatrixRow::new(439, "ABCDGHIK", "HGBDACIK"),
    MatrixRow::new(440, "ABCDGHIJ", "HGBDACIJ"),
    MatrixRow::new(441, "ABCDFJKL", "CJBDAFLK"),
    MatrixRow::new(442, "ABCDFIKL", "CIBDAFLK"),
    MatrixRow::new(443, "ABCDFIJL", "CJBDAFLI"),
    MatrixRow::new(444, "ABCDFIJK", "CJBDAFIK"),
    MatrixRow::new(445, "ABCDFHKL", "HFBDACLK"),
    MatrixRow::new(446, "ABCDFHJL", "HFBDACLJ"),
    MatrixRow::new(447, "ABCDFHJK", "HFBDACJK"),
    MatrixRow::new(448, "ABCDFHIL", "HFBDACLI"),
    MatrixRow::new(449, "ABCDFHIK", "HFBDACIK"),
    MatrixRow::new(450, "ABCDFHIJ", "HFBDACIJ"),
    MatrixRow::new(451, "ABCDFGKL", "CGBDAFLK"),
    MatrixRow::new(452, "ABCDFGJL", "CGBDAFLJ"),
    MatrixRow::new(453, "ABCDFGJK", "CGBDAFJK"),
    MatrixRow::new(454, "ABCDFGIL", "CGBDAFLI"),
    MatrixRow::new(455, "ABCDFGIK", "CGBDAFIK"),
    MatrixRow::new(456, "ABCDFGIJ", "CGBDAFIJ"),
    MatrixRow::new(457, "ABCDFGHL", "CGBDAFLH"),
    MatrixRow::new(458, "ABCDFGHK", "CGBAHFDK"),
    MatrixRow::new(459, "ABCDFGHJ", "CGBDAFJH"),
    MatrixRow::new(460, "ABCDFGHI", "CGBDAFIH"),
    MatrixRow::new(461, "ABCDEJKL", "EJBDACLK"),
    MatrixRow::new(462, "ABCDEIKL", "EIBDACLK"),
    MatrixRow::new(463, "ABCDEIJL", "EJBDACLI"),
    MatrixRow::new(464, "ABCDEIJK", "EJBDACIK"),
    MatrixRow::new(465, "ABCDEHKL", "HEBDACLK"),
    MatrixRow::new(466, "ABCDEHJL", "HJBDACLE"),
    MatrixRow::new(467, "ABCDEHJK", "HEBDACJK"),
    MatrixRow::new(468, "ABCDEHIL", "HEBDACLI"),
    MatrixRow::new(469, "ABCDEHIK", "HEBDACIK"),
    MatrixRow::new(470, "ABCDEHIJ", "HJBDACIE"),
    MatrixRow::new(471, "ABCDEGKL", "CEBDAGLK"),
    MatrixRow::new(472, "ABCDEGJL", "CJBDAGLE"),
    MatrixRow::new(473, "ABCDEGJK", "CEBDAGJK"),
    MatrixRow::new(474, "ABCDEGIL", "CEBDAGLI"),
    MatrixRow::new(475, "ABCDEGIK", "CEBDAGIK"),
    MatrixRow::new(476, "ABCDEGIJ", "CJBDAGIE"),
    MatrixRow::new(477, "ABCDEGHL", "HGBDACLE"),
    MatrixRow::new(478, "ABCDEGHK", "CEBAHGDK"),
    MatrixRow::new(479, "ABCDEGHJ", "HGBDACJE"),
    MatrixRow::new(480, "ABCDEGHI", "HGBDACIE"),
    MatrixRow::new(481, "ABCDEFKL", "CEBDAFLK"),
    MatrixRow::new(482, "ABCDEFJL", "CJBDAFLE"),
    MatrixRow::new(483, "ABCDEFJK", "CEBDAFJK"),
    MatrixRow::new(484, "ABCDEFIL", "CEBDAFLI"),
    MatrixRow::new(485, "ABCDEFIK", "CEBDAFIK"),
    MatrixRow::new(486, "ABCDEFIJ", "CJBDAFIE"),
    MatrixRow::new(487, "ABCDEFHL", "HFBDACLE"),
    MatrixRow::new(488, "ABCDEFHK", "CEBAHFDK"),
    MatrixRow::new(489, "ABCDEFHJ", "HFBDACJE"),
    MatrixRow::new(490, "ABCDEFHI", "HFBDACIE"),
    MatrixRow::new(491, "ABCDEFGL", "CGBDAFLE"),
    MatrixRow::new(492, "ABCDEFGK", "EGBCAFDK"),
    MatrixRow::new(493, "ABCDEFGJ", "CGBDAFJE"),
    MatrixRow::new(494, "ABCDEFGI", "CGBDAFIE"),
    MatrixRow::new(495, "ABCDEFGH", "CGBAHFDE"),
];
